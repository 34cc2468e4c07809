//! OpenAPI documentation descriptor
//!
//! This module builds the metadata document shown by the interactive API
//! documentation: API identity, contact, license, and the bearer-token
//! security scheme required by every documented endpoint.

use crate::core::constants::{api, contact, license, security};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme};
use utoipa::openapi::{
    ComponentsBuilder, ContactBuilder, InfoBuilder, LicenseBuilder, OpenApi, OpenApiBuilder,
};

/// Build the OpenAPI descriptor
///
/// Pure factory invoked once during router construction. Registers the
/// "Bearer Authentication" HTTP bearer scheme (JWT format) and attaches it
/// as a global security requirement so every documented endpoint is marked
/// as requiring it.
pub fn openapi() -> OpenApi {
    OpenApiBuilder::new()
        .info(
            InfoBuilder::new()
                .title(api::TITLE)
                .description(Some(api::DESCRIPTION))
                .version(api::VERSION)
                .contact(Some(
                    ContactBuilder::new()
                        .name(Some(contact::NAME))
                        .email(Some(contact::EMAIL))
                        .url(Some(contact::URL))
                        .build(),
                ))
                .license(Some(
                    LicenseBuilder::new()
                        .name(license::NAME)
                        .url(Some(license::URL))
                        .build(),
                ))
                .build(),
        )
        .components(Some(
            ComponentsBuilder::new()
                .security_scheme(
                    security::SCHEME_NAME,
                    SecurityScheme::Http(
                        HttpBuilder::new()
                            .scheme(HttpAuthScheme::Bearer)
                            .bearer_format(security::BEARER_FORMAT)
                            .description(Some(security::DESCRIPTION))
                            .build(),
                    ),
                )
                .build(),
        ))
        .security(Some(vec![SecurityRequirement::new(
            security::SCHEME_NAME,
            Vec::<String>::new(),
        )]))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn doc_json() -> Value {
        serde_json::to_value(openapi()).unwrap()
    }

    #[test]
    fn test_metadata_fields() {
        let doc = doc_json();
        assert_eq!(doc["info"]["title"], api::TITLE);
        assert_eq!(doc["info"]["description"], api::DESCRIPTION);
        assert_eq!(doc["info"]["version"], api::VERSION);
        assert_eq!(doc["info"]["contact"]["name"], contact::NAME);
        assert_eq!(doc["info"]["contact"]["email"], contact::EMAIL);
        assert_eq!(doc["info"]["contact"]["url"], contact::URL);
        assert_eq!(doc["info"]["license"]["name"], license::NAME);
        assert_eq!(doc["info"]["license"]["url"], license::URL);
    }

    #[test]
    fn test_bearer_security_scheme() {
        let doc = doc_json();
        let schemes = doc["components"]["securitySchemes"].as_object().unwrap();
        assert_eq!(schemes.len(), 1);

        let scheme = &schemes[security::SCHEME_NAME];
        assert_eq!(scheme["type"], "http");
        assert_eq!(scheme["scheme"], "bearer");
        assert_eq!(scheme["bearerFormat"], security::BEARER_FORMAT);
        assert_eq!(scheme["description"], security::DESCRIPTION);
    }

    #[test]
    fn test_global_security_requirement() {
        let doc = doc_json();
        let requirements = doc["security"].as_array().unwrap();
        assert_eq!(requirements.len(), 1);

        let scopes = requirements[0][security::SCHEME_NAME].as_array().unwrap();
        assert!(scopes.is_empty());
    }

    #[test]
    fn test_factory_is_deterministic() {
        assert_eq!(doc_json(), doc_json());
    }
}
