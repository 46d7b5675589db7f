//! # Crawl Paginate
//!
//! Next-page strategies for HTML crawlers.
//!
//! A crawler fetches a page, parses it into a [`scraper::Html`] document and
//! asks a [`Paginator`] which URL to fetch next. `None` ends the crawl.
//!
//! ## Strategies
//!
//! - [`SelectorPaginator`]: follow a link found by CSS selector
//! - [`QueryParamPaginator`]: increment a numeric query parameter
//! - [`LimitingPaginator`]: cap any paginator to a number of extra pages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crawl_paginate::{Paginator, PaginatorExt, SelectorPaginator};
//! use scraper::Html;
//!
//! let mut paginator = SelectorPaginator::next_link("a[rel=next]").limit_pages(20);
//!
//! let mut url = String::from("https://example.com/archive");
//! loop {
//!     let document = Html::parse_document(&fetch(&url)?);
//!     // ... extract content ...
//!     match paginator.next_page(&url, &document)? {
//!         Some(next) => url = next,
//!         None => break,
//!     }
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pagination strategies
pub mod pagination;

/// Declarative paginator definitions
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_paginator, load_paginator_from_str, PaginatorConfig};
pub use error::{Error, Result};
pub use pagination::{
    InvalidValuePolicy, LimitingPaginator, Paginator, PaginatorExt, QueryParamPaginator,
    SelectorPaginator,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
