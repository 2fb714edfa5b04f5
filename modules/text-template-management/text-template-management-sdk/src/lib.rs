#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Text Template Management SDK
//!
//! - [`TemplateDefinitionsApi`] - read-only catalogue of text templates
//! - [`TemplateContentsApi`] - per-culture template content, editable and
//!   restorable to the built-in default

pub mod api;
pub mod models;

pub use api::{TemplateContentsApi, TemplateDefinitionsApi};
pub use models::{
    GetTemplateContentInput, GetTemplateDefinitionListInput, RestoreTemplateContentInput,
    TemplateDefinitionDto, TextTemplateContentDto, UpdateTemplateContentInput,
};
