#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Audit logging module implementation
//!
//! REST service for `AuditLogsApi` and the read-only audit log facade,
//! either owned ([`AuditLogsFacade`]) or shared across a session
//! ([`AuditLoggingStateService`]).

pub use audit_logging_sdk::AuditLogsApi;

pub mod config;
pub mod domain;
pub mod infra;

pub use config::{AuditLoggingConfig, MODULE_NAME};
pub use domain::facade::{AuditLogSideData, AuditLogsFacade, AuditLogsState};
pub use domain::state::AuditLoggingStateService;
pub use infra::AuditLogRestService;
