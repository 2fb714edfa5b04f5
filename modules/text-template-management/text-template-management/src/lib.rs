#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Text template management module implementation
//!
//! REST services for the traits of `text-template-management-sdk` and the
//! template facade in its owned ([`TextTemplatesFacade`]) and shared
//! ([`TextTemplateManagementStateService`]) forms.

pub use text_template_management_sdk::{TemplateContentsApi, TemplateDefinitionsApi};

pub mod config;
pub mod domain;
pub mod infra;

pub use config::{MODULE_NAME, TextTemplateManagementConfig};
pub use domain::facade::{TemplateSideData, TextTemplatesFacade, TextTemplatesState};
pub use domain::state::TextTemplateManagementStateService;
pub use infra::{TemplateContentRestService, TemplateDefinitionRestService};
