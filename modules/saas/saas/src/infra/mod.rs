pub mod rest;

pub use rest::{EditionRestService, TenantRestService};
