//! ## Crate layout
//! - `core`: field descriptors, registries, resource contexts, lifecycle
//!   dispatch, cross-field constraints, and observability.
//!
//! The `prelude` module mirrors the surface used inside resource-family
//! code; hosts that only drive lifecycles can import the dispatcher types
//! directly from `core`.

pub use fleetform_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fleetform_core::Error;

///
/// Family Prelude
/// the vocabulary resource-family registration code needs, nothing more
///

pub mod prelude {
    pub use crate::core::{
        config::DeclaredConfig,
        context::ResourceContext,
        dispatch::{Dispatcher, Phase},
        error::{HookError, ReconcileError},
        family::ResourceFamily,
        field::Field,
        obs::{EventSink, ReconcileEvent},
        registry::{Registry, RegistryError},
        schema::{Cardinality, FieldSchema, SchemaKind},
        value::ConfigValue,
    };
}
