//! Core runtime for Fleetform: field descriptors, registries, lifecycle
//! dispatch, cross-field constraints, and the ergonomics exported via the
//! `prelude`.

pub mod config;
pub mod constraint;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod family;
pub mod field;
pub mod obs;
pub mod registry;
pub mod schema;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

use crate::{error::ReconcileError, registry::RegistryError};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// Maximum length for field identifiers.
///
/// This limit keeps declared snapshots and diagnostics bounded and matches
/// the host engine's attribute-name limits.
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No counters, sinks, or internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        config::DeclaredConfig,
        context::ResourceContext,
        dispatch::{Dispatcher, Phase},
        error::{HookError, ReconcileError},
        family::ResourceFamily,
        field::Field,
        registry::{Registry, RegistryError},
        schema::{Cardinality, FieldSchema, SchemaKind},
        value::ConfigValue,
    };
}
