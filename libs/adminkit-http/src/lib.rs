#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! Request execution for `AdminKit` modules
//!
//! This crate defines the narrow transport contract every entity service
//! consumes and ships one implementation of it:
//! - [`RequestExecutor`]: `request(descriptor) -> ResponseBody`, failing with
//!   [`TransportError`] on any non-2xx answer
//! - [`RequestDescriptor`]: method, URL, query parameters, JSON body and
//!   expected response type
//! - [`RestClient`]: typed GET/POST/PUT/DELETE helpers rooted at an API base path
//! - [`HttpRequestExecutor`]: hyper + rustls executor with timeouts, bearer
//!   authentication and backend error-envelope parsing
//! - [`AdminClientConfig`]: layered YAML/env configuration
//!
//! # Example
//!
//! ```ignore
//! use adminkit_http::{AdminClientConfig, HttpRequestExecutor, RestClient};
//! use std::sync::Arc;
//!
//! let config = AdminClientConfig::load(None)?;
//! let executor = Arc::new(HttpRequestExecutor::new(&config.http)?);
//! let rest = RestClient::new(executor, "/api/saas");
//! let page: serde_json::Value = rest.get_json(&rest.url(&["editions"]), None::<&()>).await?;
//! ```

mod client;
pub mod config;
mod error;
mod executor;
mod request;
mod response;
mod rest;
mod secret;
mod tls;

pub use client::HttpRequestExecutor;
pub use config::{
    AdminClientConfig, ConfigError, DEFAULT_USER_AGENT, HttpExecutorConfig, TlsRoots,
    TransportSecurity,
};
pub use error::TransportError;
pub use executor::RequestExecutor;
pub use http::StatusCode;
pub use request::{Method, RequestDescriptor, ResponseType};
pub use response::ResponseBody;
pub use rest::RestClient;
pub use secret::AccessToken;
