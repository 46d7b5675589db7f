//! Configuration types for paginator definitions
//!
//! Paginators can be described declaratively in YAML and built into a
//! `Box<dyn Paginator>`:
//!
//! ```yaml
//! type: limit
//! limit: 5
//! inner:
//!   type: query_param
//!   param: page
//! ```

use crate::error::{Error, Result};
use crate::pagination::{
    InvalidValuePolicy, LimitingPaginator, Paginator, QueryParamPaginator, SelectorPaginator,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Paginator Config
// ============================================================================

/// Declarative paginator definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaginatorConfig {
    /// Follow an attribute of the first element matching a CSS selector
    Selector {
        selector: String,
        #[serde(default = "default_attribute")]
        attribute: String,
    },

    /// Increment a numeric query parameter
    QueryParam {
        param: String,
        #[serde(default)]
        on_invalid: InvalidValuePolicy,
    },

    /// Cap the number of additional pages of another paginator
    Limit {
        limit: u64,
        inner: Box<PaginatorConfig>,
    },
}

fn default_attribute() -> String {
    "href".to_string()
}

impl PaginatorConfig {
    /// Check that every field of the definition is usable
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Selector {
                selector,
                attribute,
            } => {
                if selector.trim().is_empty() {
                    return Err(Error::invalid_value("selector", "must not be empty"));
                }
                if attribute.trim().is_empty() {
                    return Err(Error::invalid_value("attribute", "must not be empty"));
                }
                SelectorPaginator::try_new(selector.as_str(), attribute.as_str()).map(|_| ())
            }
            Self::QueryParam { param, .. } => {
                if param.is_empty() {
                    return Err(Error::invalid_value("param", "must not be empty"));
                }
                Ok(())
            }
            Self::Limit { inner, .. } => inner.validate(),
        }
    }

    /// Validate and construct the paginator chain
    pub fn build(&self) -> Result<Box<dyn Paginator>> {
        self.validate()?;
        Ok(self.build_unchecked())
    }

    fn build_unchecked(&self) -> Box<dyn Paginator> {
        match self {
            Self::Selector {
                selector,
                attribute,
            } => Box::new(SelectorPaginator::new(selector.as_str(), attribute.as_str())),
            Self::QueryParam { param, on_invalid } => Box::new(
                QueryParamPaginator::new(param.as_str()).with_invalid_value_policy(*on_invalid),
            ),
            Self::Limit { limit, inner } => {
                Box::new(LimitingPaginator::new(*limit, inner.build_unchecked()))
            }
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a paginator definition from a YAML file
pub fn load_paginator(path: impl AsRef<Path>) -> Result<PaginatorConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read paginator file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_paginator_from_str(&content)
}

/// Parse a paginator definition from a YAML string
pub fn load_paginator_from_str(yaml: &str) -> Result<PaginatorConfig> {
    let config: PaginatorConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scraper::Html;
    use std::io::Write;

    #[test]
    fn test_parse_selector_default_attribute() {
        let yaml = r#"
type: selector
selector: "a.next"
"#;
        let config: PaginatorConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config,
            PaginatorConfig::Selector {
                selector: "a.next".to_string(),
                attribute: "href".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_query_param_policy() {
        let yaml = r#"
type: query_param
param: page
on_invalid: error
"#;
        let config: PaginatorConfig = serde_yaml::from_str(yaml).unwrap();
        match config {
            PaginatorConfig::QueryParam { param, on_invalid } => {
                assert_eq!(param, "page");
                assert_eq!(on_invalid, InvalidValuePolicy::Error);
            }
            _ => panic!("Expected QueryParam paginator"),
        }
    }

    #[test]
    fn test_parse_nested_limit() {
        let yaml = r#"
type: limit
limit: 3
inner:
  type: query_param
  param: p
"#;
        let config = load_paginator_from_str(yaml).unwrap();
        match config {
            PaginatorConfig::Limit { limit, inner } => {
                assert_eq!(limit, 3);
                assert_eq!(
                    *inner,
                    PaginatorConfig::QueryParam {
                        param: "p".to_string(),
                        on_invalid: InvalidValuePolicy::Stop,
                    }
                );
            }
            _ => panic!("Expected Limit paginator"),
        }
    }

    #[test]
    fn test_parse_unknown_type() {
        let err = load_paginator_from_str("type: infinite_scroll\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = PaginatorConfig::Selector {
            selector: "  ".to_string(),
            attribute: "href".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { ref field, .. }) if field == "selector"
        ));

        let config = PaginatorConfig::Selector {
            selector: "a[".to_string(),
            attribute: "href".to_string(),
        };
        assert!(config.build().is_err());

        let config = PaginatorConfig::Limit {
            limit: 2,
            inner: Box::new(PaginatorConfig::QueryParam {
                param: String::new(),
                on_invalid: InvalidValuePolicy::Stop,
            }),
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { ref field, .. }) if field == "param"
        ));
    }

    #[test]
    fn test_build_limited_query_param() {
        let config = load_paginator_from_str(
            r#"
type: limit
limit: 1
inner:
  type: query_param
  param: page
"#,
        )
        .unwrap();
        let mut paginator = config.build().unwrap();
        let document = Html::parse_document("<html></html>");

        let next = paginator.next_page("https://example.com/?page=1", &document).unwrap();
        assert_eq!(next.as_deref(), Some("https://example.com/?page=2"));

        let next = paginator.next_page("https://example.com/?page=2", &document).unwrap();
        assert_eq!(next, None);
    }

    #[test]
    fn test_load_paginator_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "type: selector\nselector: link[rel=next]").unwrap();

        let config = load_paginator(file.path()).unwrap();
        let mut paginator = config.build().unwrap();
        let document =
            Html::parse_document(r#"<html><head><link rel="next" href="/archive/2"></head></html>"#);

        let next = paginator.next_page("https://blog.example/archive/1", &document).unwrap();
        assert_eq!(next.as_deref(), Some("https://blog.example/archive/2"));
    }

    #[test]
    fn test_load_paginator_missing_file() {
        let err = load_paginator("/nonexistent/paginator.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("paginator.yaml"));
    }

    #[test]
    fn test_config_round_trip_yaml() {
        let config = PaginatorConfig::Limit {
            limit: 10,
            inner: Box::new(PaginatorConfig::Selector {
                selector: "a.next".to_string(),
                attribute: "href".to_string(),
            }),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(load_paginator_from_str(&yaml).unwrap(), config);
    }
}
