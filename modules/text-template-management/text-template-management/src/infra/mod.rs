pub mod rest;

pub use rest::{TemplateContentRestService, TemplateDefinitionRestService};
