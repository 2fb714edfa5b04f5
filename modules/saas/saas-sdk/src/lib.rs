#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! SaaS SDK
//!
//! Public contract of the `saas` module:
//!
//! - [`TenantsApi`] - tenant CRUD, default connection string, edition lookup
//! - [`EditionsApi`] - edition CRUD and usage statistics
//! - Tenant and edition DTOs in [`models`]
//!
//! ## Usage
//!
//! ```ignore
//! use saas_sdk::{GetEditionsInput, EditionsApi};
//!
//! let page = editions.get_list(&GetEditionsInput::filtered("pro")).await?;
//! let stats = editions.get_usage_statistics().await?;
//! ```

pub mod api;
pub mod models;

pub use api::{EditionsApi, TenantsApi};
pub use models::{
    ActivationState, EditionCreateDto, EditionDto, EditionLookupDto, EditionUpdateDto,
    EditionUsageStatistics, GetEditionsInput, GetTenantsInput, SaasTenantConnectionStringsDto,
    SaasTenantCreateDto, SaasTenantDatabaseConnectionStringDto, SaasTenantSetPasswordDto,
    SaasTenantUpdateDto, TenantDto,
};
