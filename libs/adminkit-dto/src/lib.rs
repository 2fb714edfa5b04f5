#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared DTO shapes for `AdminKit` modules.
//!
//! Every list endpoint of the admin backend answers with a [`PagedResult`]
//! and accepts the paging/sorting fields of [`PagedAndSortedQuery`]. Module
//! SDKs flatten `PagedAndSortedQuery` into their entity-specific filters.

mod paging;

pub use paging::{PagedAndSortedQuery, PagedResult};

/// Opaque entity identifier as issued by the backend.
pub type EntityId = String;
