//! Cross-field constraint passes.
//!
//! Both checks run over declared snapshots only, never the domain object,
//! and run registry-wide before any field hook executes for the phase.
//! First violation wins; iteration follows registration order so failures
//! are deterministic.

use crate::{config::DeclaredConfig, error::ReconcileError, registry::Registry};

/// Reject desired snapshots that set two mutually exclusive fields to
/// non-empty values. Runs during create and update.
pub fn check_conflicts<D>(
    registry: &Registry<D>,
    desired: &DeclaredConfig,
) -> Result<(), ReconcileError> {
    for field in registry.iter() {
        if !desired.has_value(field.ident) {
            continue;
        }
        for target in field.conflict_targets().iter().copied() {
            if desired.has_value(target) {
                return Err(ReconcileError::ConflictingFields {
                    first: field.ident,
                    second: target,
                });
            }
        }
    }

    Ok(())
}

/// Reject updates that change an immutable field's declared value.
///
/// Omission from the desired snapshot is not a change (sparse update
/// semantics win); introducing a non-empty value that the prior snapshot
/// never carried is.
pub fn check_immutable<D>(
    registry: &Registry<D>,
    prior: &DeclaredConfig,
    desired: &DeclaredConfig,
) -> Result<(), ReconcileError> {
    for field in registry.iter().filter(|field| field.is_immutable()) {
        let changed = match (prior.get(field.ident), desired.get(field.ident)) {
            (Some(p), Some(d)) => p != d,
            (None, Some(d)) => !d.is_empty(),
            _ => false,
        };
        if changed {
            return Err(ReconcileError::ImmutableField(field.ident));
        }
    }

    Ok(())
}
