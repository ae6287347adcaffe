use crate::dispatch::Phase;

///
/// ReconcileEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReconcileEvent {
    PhaseStart {
        phase: Phase,
        resource: &'static str,
    },
    FieldApplied {
        phase: Phase,
        field: &'static str,
    },
    PhaseFinish {
        phase: Phase,
        resource: &'static str,
        fields_applied: u64,
    },
    ConstraintViolation {
        phase: Phase,
        field: &'static str,
    },
    PhaseError {
        phase: Phase,
        field: &'static str,
    },
}

///
/// EventSink
///
/// Caller-injected observer for one dispatcher. Implementations must not
/// assume anything about ordering beyond: `PhaseStart` first, then zero or
/// more `FieldApplied`, then exactly one of `PhaseFinish`, `PhaseError`, or
/// `ConstraintViolation`.
///

pub trait EventSink {
    fn record(&self, event: ReconcileEvent);
}
