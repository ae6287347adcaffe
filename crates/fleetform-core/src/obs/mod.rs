//! Reconcile observability.
//!
//! Dispatch logic MUST NOT depend on counter state directly; all
//! instrumentation flows through [`ReconcileEvent`] and [`EventSink`].
//! Counters are process-local bookkeeping for endpoint/test plumbing and
//! never influence reconcile semantics.

pub mod sink;

pub use sink::{EventSink, ReconcileEvent};

use crate::dispatch::Phase;
use serde::Serialize;
use std::cell::RefCell;

///
/// OpCounters
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct OpCounters {
    pub read_calls: u64,
    pub create_calls: u64,
    pub update_calls: u64,
    pub delete_calls: u64,
    pub fields_applied: u64,
    pub field_errors: u64,
    pub constraint_violations: u64,
}

thread_local! {
    static COUNTERS: RefCell<OpCounters> = RefCell::new(OpCounters::default());
}

fn with_state_mut<R>(f: impl FnOnce(&mut OpCounters) -> R) -> R {
    COUNTERS.with_borrow_mut(f)
}

/// Route one event into the counters and the caller's sink, if any.
pub(crate) fn record(sink: Option<&dyn EventSink>, event: ReconcileEvent) {
    with_state_mut(|c| match event {
        ReconcileEvent::PhaseStart { phase, .. } => match phase {
            Phase::Read => c.read_calls = c.read_calls.saturating_add(1),
            Phase::Create => c.create_calls = c.create_calls.saturating_add(1),
            Phase::Update => c.update_calls = c.update_calls.saturating_add(1),
            Phase::Delete => c.delete_calls = c.delete_calls.saturating_add(1),
        },
        ReconcileEvent::FieldApplied { .. } => {
            c.fields_applied = c.fields_applied.saturating_add(1);
        }
        ReconcileEvent::PhaseError { .. } => {
            c.field_errors = c.field_errors.saturating_add(1);
        }
        ReconcileEvent::ConstraintViolation { .. } => {
            c.constraint_violations = c.constraint_violations.saturating_add(1);
        }
        ReconcileEvent::PhaseFinish { .. } => {}
    });

    if let Some(sink) = sink {
        sink.record(event);
    }
}

/// Snapshot the current counter state for endpoint/test plumbing.
#[must_use]
pub fn counters_report() -> OpCounters {
    COUNTERS.with_borrow(|c| *c)
}

/// Reset all counter state.
pub fn counters_reset_all() {
    with_state_mut(|c| *c = OpCounters::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_accumulate_into_counters() {
        counters_reset_all();

        record(
            None,
            ReconcileEvent::PhaseStart {
                phase: Phase::Create,
                resource: "obs::tests::Resource",
            },
        );
        record(
            None,
            ReconcileEvent::FieldApplied {
                phase: Phase::Create,
                field: "od_count",
            },
        );
        record(
            None,
            ReconcileEvent::PhaseFinish {
                phase: Phase::Create,
                resource: "obs::tests::Resource",
                fields_applied: 1,
            },
        );
        record(
            None,
            ReconcileEvent::ConstraintViolation {
                phase: Phase::Update,
                field: "region",
            },
        );

        let counters = counters_report();
        assert_eq!(counters.create_calls, 1);
        assert_eq!(counters.fields_applied, 1);
        assert_eq!(counters.constraint_violations, 1);
        assert_eq!(counters.field_errors, 0);
    }

    #[test]
    fn reset_clears_every_counter() {
        record(
            None,
            ReconcileEvent::PhaseStart {
                phase: Phase::Read,
                resource: "obs::tests::Resource",
            },
        );
        counters_reset_all();

        assert_eq!(counters_report(), OpCounters::default());
    }
}
