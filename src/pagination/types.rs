//! Pagination types and traits
//!
//! Defines the core pagination abstraction used by all strategies.

use super::strategies::LimitingPaginator;
use crate::error::Result;
use scraper::Html;

/// Core trait for pagination strategies
///
/// Called once per fetched page. `Ok(Some(url))` is the absolute URL of the
/// next page to fetch, `Ok(None)` means there is nothing more to paginate.
/// Errors are reserved for malformed input (see [`crate::Error::is_pagination_error`]).
///
/// Takes `&mut self` because decorators such as [`LimitingPaginator`] keep
/// counters. A paginator shared between crawl workers has to be wrapped in a
/// lock by the caller.
pub trait Paginator: Send {
    /// Compute the URL of the page after `current_url`
    fn next_page(&mut self, current_url: &str, document: &Html) -> Result<Option<String>>;
}

impl<P: Paginator + ?Sized> Paginator for Box<P> {
    fn next_page(&mut self, current_url: &str, document: &Html) -> Result<Option<String>> {
        (**self).next_page(current_url, document)
    }
}

impl<P: Paginator + ?Sized> Paginator for &mut P {
    fn next_page(&mut self, current_url: &str, document: &Html) -> Result<Option<String>> {
        (**self).next_page(current_url, document)
    }
}

/// Combinators available on every paginator
pub trait PaginatorExt: Paginator + Sized {
    /// Stop after `limit` additional pages
    fn limit_pages(self, limit: u64) -> LimitingPaginator<Self> {
        LimitingPaginator::new(limit, self)
    }

    /// Erase the concrete type
    fn boxed(self) -> Box<dyn Paginator>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<P: Paginator> PaginatorExt for P {}
