//! Pagination module
//!
//! Supports: Selector link, Query parameter, Page limit
//!
//! # Overview
//!
//! The pagination module answers one question for a crawler: given the page
//! just fetched, which URL comes next? Leaf strategies look at the document
//! or the URL; [`LimitingPaginator`] wraps any of them to bound the crawl.
//!
//! ```rust,ignore
//! use crawl_paginate::pagination::{Paginator, PaginatorExt, QueryParamPaginator};
//!
//! let mut paginator = QueryParamPaginator::new("page").limit_pages(10);
//! let next = paginator.next_page("https://example.com/list?page=1", &document)?;
//! ```

mod query;
mod strategies;
mod types;

pub use strategies::{
    InvalidValuePolicy, LimitingPaginator, QueryParamPaginator, SelectorPaginator,
};
pub use types::{Paginator, PaginatorExt};
