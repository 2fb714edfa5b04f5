#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Audit Logging SDK
//!
//! [`AuditLogsApi`] reads the backend's audit trail: request audit logs,
//! error-rate and duration statistics, and entity change history. The
//! trail is append-only; nothing in this API mutates it.

pub mod api;
pub mod models;

pub use api::AuditLogsApi;
pub use models::{
    AuditLogActionDto, AuditLogDto, AverageExecutionDurationPerDayInput,
    AverageExecutionDurationPerDayOutput, EntityChangeDto, EntityChangeFilter, EntityChangeType,
    EntityChangeWithUsernameDto, EntityPropertyChangeDto, ErrorRateFilter, ErrorRateOutput,
    GetAuditLogListDto, GetEntityChangesDto,
};
