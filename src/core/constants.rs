//! Constants for API identity and documentation metadata
//!
//! This module defines the string constants used for the OpenAPI descriptor,
//! the bearer-token security scheme, and the documentation routes.

/// API identity constants
pub mod api {
    /// API title shown in the documentation
    pub const TITLE: &str = "Sree Ranga Department Stores API";

    /// API description shown in the documentation
    pub const DESCRIPTION: &str =
        "Complete e-commerce backend API for Sree Ranga Department Stores";

    /// Published API version
    pub const VERSION: &str = "1.0.0";
}

/// Contact information constants
pub mod contact {
    /// Team name
    pub const NAME: &str = "Sree Ranga Team";

    /// Contact email address
    pub const EMAIL: &str = "api@sreeranga.com";

    /// Contact URL
    pub const URL: &str = "https://sreeranga.com";
}

/// License constants
pub mod license {
    /// License name
    pub const NAME: &str = "MIT License";

    /// OSI license URL
    pub const URL: &str = "https://opensource.org/licenses/MIT";
}

/// Security scheme constants
pub mod security {
    /// Name of the bearer-token security scheme
    pub const SCHEME_NAME: &str = "Bearer Authentication";

    /// Expected credential format
    pub const BEARER_FORMAT: &str = "JWT";

    /// Human-readable scheme description
    pub const DESCRIPTION: &str = "Enter JWT token";
}

/// Documentation route constants
pub mod route {
    /// Interactive documentation UI
    pub const SWAGGER_UI: &str = "/swagger-ui.html";

    /// Machine-readable OpenAPI document
    pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
}
