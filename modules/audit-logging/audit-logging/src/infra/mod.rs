pub mod rest;

pub use rest::AuditLogRestService;
