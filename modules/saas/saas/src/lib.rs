#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! SaaS module implementation
//!
//! REST services for the traits of `saas-sdk` plus the tenant and edition
//! facades. Use [`TenantsFacade`]/[`EditionsFacade`] directly for state
//! owned by a single view, or [`SaasStateService`] for state shared across
//! a session.

pub use saas_sdk::{EditionsApi, TenantsApi};

pub mod config;
pub mod domain;
pub mod infra;

pub use config::{MODULE_NAME, SaasConfig};
pub use domain::editions::{EditionSideData, EditionsFacade, EditionsState};
pub use domain::state::SaasStateService;
pub use domain::tenants::{TenantSideData, TenantsFacade, TenantsState};
pub use infra::{EditionRestService, TenantRestService};
