use crate::{
    config::DeclaredConfig,
    constraint,
    context::ResourceContext,
    error::ReconcileError,
    obs::{self, EventSink, ReconcileEvent},
    registry::Registry,
};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Phase
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Phase {
    Read,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        write!(f, "{label}")
    }
}

///
/// Dispatcher
///
/// Pure orchestration of one lifecycle phase over a registry and a resource
/// context. Every phase is synchronous, fail-fast, and non-transactional:
/// the first hook or constraint failure aborts the phase, and a domain
/// object from a failed create/update must be discarded by the caller, not
/// reused.
///
/// The event sink is optional, injected by the caller, and must not affect
/// reconcile semantics.
///

pub struct Dispatcher<'r, D> {
    registry: &'r Registry<D>,
    resource: &'static str,
    sink: Option<&'r dyn EventSink>,
}

impl<'r, D> Dispatcher<'r, D> {
    #[must_use]
    pub const fn new(registry: &'r Registry<D>, resource: &'static str) -> Self {
        Self {
            registry,
            resource,
            sink: None,
        }
    }

    #[must_use]
    pub const fn with_sink(mut self, sink: &'r dyn EventSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Project the domain object into a fresh declared snapshot.
    ///
    /// All-or-nothing: any populate hook failure aborts the whole read and
    /// no snapshot is returned, so the host never observes a partially
    /// populated state as drift. Fields without a populate hook are
    /// write-only and are skipped.
    pub fn populate(
        &self,
        ctx: &ResourceContext<'_, D>,
    ) -> Result<DeclaredConfig, ReconcileError> {
        self.emit(ReconcileEvent::PhaseStart {
            phase: Phase::Read,
            resource: self.resource,
        });

        let mut declared = DeclaredConfig::new();
        let mut applied = 0;

        for field in self.registry.iter() {
            let Some(hook) = field.populate_hook() else {
                continue;
            };
            if let Err(source) = hook(ctx.domain(), &mut declared) {
                return Err(self.fail(Phase::Read, field.ident, source));
            }
            applied += 1;
            self.emit(ReconcileEvent::FieldApplied {
                phase: Phase::Read,
                field: field.ident,
            });
        }

        self.finish(Phase::Read, applied);

        Ok(declared)
    }

    /// Apply the desired snapshot onto a freshly-initialized domain object.
    ///
    /// Fields absent from the snapshot are skipped; the engine applies no
    /// defaulting of its own. The mutual-exclusion pass runs before any
    /// hook.
    pub fn create(&self, ctx: &mut ResourceContext<'_, D>) -> Result<(), ReconcileError> {
        self.emit(ReconcileEvent::PhaseStart {
            phase: Phase::Create,
            resource: self.resource,
        });

        if let Err(err) = constraint::check_conflicts(self.registry, ctx.desired()) {
            return Err(self.reject(Phase::Create, err));
        }

        let mut applied = 0;

        for field in self.registry.iter() {
            if !ctx.desired().contains(field.ident) {
                continue;
            }
            let (domain, desired) = ctx.parts();
            if let Err(source) = (field.create_hook())(domain, desired) {
                return Err(self.fail(Phase::Create, field.ident, source));
            }
            applied += 1;
            self.emit(ReconcileEvent::FieldApplied {
                phase: Phase::Create,
                field: field.ident,
            });
        }

        self.finish(Phase::Create, applied);

        Ok(())
    }

    /// Apply the desired snapshot onto a domain object that already carries
    /// prior state.
    ///
    /// Sparse update semantics: fields absent from the desired snapshot are
    /// left untouched, never implicitly cleared. Constraint passes
    /// (immutability, then mutual exclusion) run before any hook. A field
    /// present in the snapshot has its hook invoked unconditionally,
    /// changed or not; hooks are upserts, so re-applying an unchanged value
    /// is a no-op.
    pub fn update(&self, ctx: &mut ResourceContext<'_, D>) -> Result<(), ReconcileError> {
        self.emit(ReconcileEvent::PhaseStart {
            phase: Phase::Update,
            resource: self.resource,
        });

        let empty = DeclaredConfig::new();
        let prior = ctx.prior().unwrap_or(&empty);
        if let Err(err) = constraint::check_immutable(self.registry, prior, ctx.desired()) {
            return Err(self.reject(Phase::Update, err));
        }
        if let Err(err) = constraint::check_conflicts(self.registry, ctx.desired()) {
            return Err(self.reject(Phase::Update, err));
        }

        let mut applied = 0;

        for field in self.registry.iter() {
            if !ctx.desired().contains(field.ident) {
                continue;
            }
            let (domain, desired) = ctx.parts();
            if let Err(source) = (field.update_hook())(domain, desired) {
                return Err(self.fail(Phase::Update, field.ident, source));
            }
            applied += 1;
            self.emit(ReconcileEvent::FieldApplied {
                phase: Phase::Update,
                field: field.ident,
            });
        }

        self.finish(Phase::Update, applied);

        Ok(())
    }

    /// Clear field-level auxiliary state ahead of resource deletion.
    ///
    /// Deletion of the enclosing domain object belongs to the host; fields
    /// without a delete hook are skipped.
    pub fn delete(&self, ctx: &mut ResourceContext<'_, D>) -> Result<(), ReconcileError> {
        self.emit(ReconcileEvent::PhaseStart {
            phase: Phase::Delete,
            resource: self.resource,
        });

        let mut applied = 0;

        for field in self.registry.iter() {
            let Some(hook) = field.delete_hook() else {
                continue;
            };
            if let Err(source) = hook(ctx.domain_mut()) {
                return Err(self.fail(Phase::Delete, field.ident, source));
            }
            applied += 1;
            self.emit(ReconcileEvent::FieldApplied {
                phase: Phase::Delete,
                field: field.ident,
            });
        }

        self.finish(Phase::Delete, applied);

        Ok(())
    }

    fn emit(&self, event: ReconcileEvent) {
        obs::record(self.sink, event);
    }

    fn finish(&self, phase: Phase, fields_applied: u64) {
        self.emit(ReconcileEvent::PhaseFinish {
            phase,
            resource: self.resource,
            fields_applied,
        });
    }

    fn fail(
        &self,
        phase: Phase,
        field: &'static str,
        source: crate::error::HookError,
    ) -> ReconcileError {
        self.emit(ReconcileEvent::PhaseError { phase, field });

        ReconcileError::from_hook(phase, field, source)
    }

    fn reject(&self, phase: Phase, err: ReconcileError) -> ReconcileError {
        self.emit(ReconcileEvent::ConstraintViolation {
            phase,
            field: err.field(),
        });

        err
    }
}
