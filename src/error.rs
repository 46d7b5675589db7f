//! Error types for crawl-paginate
//!
//! Pagination itself only ever fails with [`Error::UrlParse`] or
//! [`Error::QueryParse`]. Everything else here comes from building paginators
//! out of configuration.

use thiserror::Error;

/// The main error type for crawl-paginate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Failed to parse URL '{input}': {source}")]
    UrlParse {
        input: String,
        source: url::ParseError,
    },

    #[error("Failed to parse query string '{query}': {message}")]
    QueryParse { query: String, message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a URL parse error for the given input
    pub fn url_parse(input: impl Into<String>, source: url::ParseError) -> Self {
        Self::UrlParse {
            input: input.into(),
            source,
        }
    }

    /// Create a query parse error
    pub fn query_parse(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueryParse {
            query: query.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error was raised while computing a next page
    pub fn is_pagination_error(&self) -> bool {
        matches!(self, Error::UrlParse { .. } | Error::QueryParse { .. })
    }
}

/// Result type alias for crawl-paginate
pub type Result<T> = std::result::Result<T, Error>;
