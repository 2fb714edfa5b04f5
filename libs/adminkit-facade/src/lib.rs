#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Stateful paginated entity facade engine
//!
//! A facade sits between an entity service and its UI consumers. It keeps a
//! [`Snapshot`] (current page, total count, selected entity, side data), a
//! loading flag and a display-ready error string, and exposes operations
//! that never raise: each returns an [`OperationResult`].
//!
//! [`FacadeStore`] implements the shared discipline:
//! - the loading flag is raised while any operation is in flight
//! - the error is cleared when an operation starts and set when one fails
//! - each snapshot [`Slot`] only accepts the response of its latest request
//! - [`FacadeStore::subscribe`] notifies observers after every state change
//!
//! Entity modules build their facades on top of a store and choose a
//! [`RefreshPolicy`] according to their presentation shape.

mod error;
mod policy;
mod result;
mod snapshot;
mod store;

pub use error::PreconditionError;
pub use policy::RefreshPolicy;
pub use result::OperationResult;
pub use snapshot::{FacadeState, Snapshot};
pub use store::{FacadeStore, Operation, Slot};

#[cfg(test)]
mod store_tests;
