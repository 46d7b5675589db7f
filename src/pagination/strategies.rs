//! Pagination strategy implementations
//!
//! Each strategy handles a specific pagination pattern.

use super::query::RawQuery;
use super::types::Paginator;
use crate::error::{Error, Result};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

// ============================================================================
// Selector Pagination
// ============================================================================

/// Follows a link found in the current document
///
/// Selects the first element matching a CSS selector and resolves one of its
/// attributes against the current URL.
/// Common patterns:
/// - `<a class="next" href="/page/2">`
/// - `<link rel="next" href="?page=2">`
#[derive(Debug, Clone)]
pub struct SelectorPaginator {
    selector_expr: String,
    selector: Option<Selector>,
    attribute: String,
}

impl SelectorPaginator {
    /// Create a new selector paginator
    ///
    /// A selector that fails to compile never matches, which ends pagination
    /// on the first page. Use [`SelectorPaginator::try_new`] to reject it instead.
    pub fn new(selector: impl Into<String>, attribute: impl Into<String>) -> Self {
        let selector_expr = selector.into();
        let compiled = match Selector::parse(&selector_expr) {
            Ok(compiled) => Some(compiled),
            Err(e) => {
                warn!("Invalid pagination selector '{}': {}", selector_expr, e);
                None
            }
        };
        Self {
            selector_expr,
            selector: compiled,
            attribute: attribute.into(),
        }
    }

    /// Create a selector paginator, failing on an invalid selector
    pub fn try_new(selector: impl Into<String>, attribute: impl Into<String>) -> Result<Self> {
        let selector_expr = selector.into();
        let compiled = Selector::parse(&selector_expr)
            .map_err(|e| Error::invalid_value("selector", format!("'{selector_expr}': {e}")))?;
        Ok(Self {
            selector_expr,
            selector: Some(compiled),
            attribute: attribute.into(),
        })
    }

    /// Follow the `href` of the first element matching `selector`
    pub fn next_link(selector: impl Into<String>) -> Self {
        Self::new(selector, "href")
    }

    /// The selector expression as configured
    pub fn selector(&self) -> &str {
        &self.selector_expr
    }

    /// The attribute read from the matched element
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Attribute value of the first matching element
    fn extract<'a>(&self, document: &'a Html) -> Option<&'a str> {
        let selector = self.selector.as_ref()?;
        document
            .select(selector)
            .next()?
            .value()
            .attr(&self.attribute)
    }
}

impl Paginator for SelectorPaginator {
    fn next_page(&mut self, current_url: &str, document: &Html) -> Result<Option<String>> {
        let Some(value) = self.extract(document) else {
            debug!(
                "No '{}' attribute on '{}', pagination done",
                self.attribute, self.selector_expr
            );
            return Ok(None);
        };

        let base = Url::parse(current_url).map_err(|e| Error::url_parse(current_url, e))?;
        let next = base.join(value).map_err(|e| Error::url_parse(value, e))?;

        debug!("Next page from selector: {}", next);
        Ok(Some(next.into()))
    }
}

// ============================================================================
// Query Parameter Pagination
// ============================================================================

/// What to do when the page parameter is not a number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidValuePolicy {
    /// End pagination quietly
    #[default]
    Stop,
    /// Fail with a query parse error
    Error,
}

/// Increments a numeric query parameter
///
/// Common patterns:
/// - `?page=2` -> `?page=3`
/// - `?sort=asc&p=7` -> `?sort=asc&p=8`
///
/// This never stops on its own while the parameter keeps appearing in the
/// URL. Wrap it in a [`LimitingPaginator`] to bound the crawl.
#[derive(Debug, Clone)]
pub struct QueryParamPaginator {
    /// Query parameter holding the page number
    pub param: String,
    /// Handling of non-numeric values
    pub on_invalid: InvalidValuePolicy,
}

impl QueryParamPaginator {
    /// Create a new query parameter paginator
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            on_invalid: InvalidValuePolicy::Stop,
        }
    }

    /// Set the policy for non-numeric values
    #[must_use]
    pub fn with_invalid_value_policy(mut self, policy: InvalidValuePolicy) -> Self {
        self.on_invalid = policy;
        self
    }
}

impl Paginator for QueryParamPaginator {
    fn next_page(&mut self, current_url: &str, _document: &Html) -> Result<Option<String>> {
        let mut url = Url::parse(current_url).map_err(|e| Error::url_parse(current_url, e))?;
        let query = RawQuery::parse(url.query().unwrap_or_default())?;

        let Some((index, value)) = query.find(&self.param) else {
            debug!("Query parameter '{}' not present, pagination done", self.param);
            return Ok(None);
        };

        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return match self.on_invalid {
                InvalidValuePolicy::Stop => {
                    debug!(
                        "Query parameter '{}' is not numeric ('{}'), pagination done",
                        self.param, value
                    );
                    Ok(None)
                }
                InvalidValuePolicy::Error => Err(Error::query_parse(
                    query.as_str(),
                    format!("parameter '{}' has non-numeric value '{value}'", self.param),
                )),
            };
        }

        let next = value
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| {
                Error::query_parse(
                    query.as_str(),
                    format!("parameter '{}' value '{value}' overflows u64", self.param),
                )
            })?;

        // Only the page segment changes, the rest of the query stays raw
        let query = query.with_value(index, &next.to_string());
        url.set_query(Some(&query));

        debug!("Next page from query parameter: {}", url);
        Ok(Some(url.into()))
    }
}

// ============================================================================
// Limiting Pagination
// ============================================================================

/// Caps how many times another paginator may advance
///
/// The first page of a crawl is always fetched, so `limit` counts the
/// *additional* pages: a limit of 1 yields the start page plus one more, and
/// a limit of 0 never paginates.
#[derive(Debug, Clone)]
pub struct LimitingPaginator<P> {
    current: u64,
    limit: u64,
    inner: P,
}

impl<P: Paginator> LimitingPaginator<P> {
    /// Wrap `inner`, allowing at most `limit` further pages
    pub fn new(limit: u64, inner: P) -> Self {
        Self {
            current: 0,
            limit,
            inner,
        }
    }

    /// Number of times the inner paginator has been invoked
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Configured page limit
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Pages left before the limit is hit
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.current)
    }

    /// Check if the limit has been reached
    pub fn is_exhausted(&self) -> bool {
        self.current >= self.limit
    }

    /// Borrow the wrapped paginator
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwrap the inner paginator
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Paginator> Paginator for LimitingPaginator<P> {
    fn next_page(&mut self, current_url: &str, document: &Html) -> Result<Option<String>> {
        if self.is_exhausted() {
            debug!("Page limit {} reached, pagination done", self.limit);
            return Ok(None);
        }

        // Counted before delegating: a failed attempt still uses up a page.
        self.current += 1;
        self.inner.next_page(current_url, document)
    }
}
