use crate::dispatch::Phase;
use thiserror::Error as ThisError;

/// Failure surfaced by a field hook; the engine wraps it with the field and
/// phase that produced it.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

///
/// ReconcileError
///
/// Phase-scoped runtime failures. Every variant names the offending field;
/// hook failures carry the underlying cause. All phases are fail-fast and
/// non-transactional: the caller must discard a domain object from a failed
/// phase rather than reuse it.
///

#[derive(Debug, ThisError)]
pub enum ReconcileError {
    #[error("fields '{first}' and '{second}' are mutually exclusive")]
    ConflictingFields {
        first: &'static str,
        second: &'static str,
    },

    #[error("failed creating field '{field}': {source}")]
    FieldCreate {
        field: &'static str,
        #[source]
        source: HookError,
    },

    #[error("failed deleting field '{field}': {source}")]
    FieldDelete {
        field: &'static str,
        #[source]
        source: HookError,
    },

    #[error("failed reading field '{field}': {source}")]
    FieldRead {
        field: &'static str,
        #[source]
        source: HookError,
    },

    #[error("failed updating field '{field}': {source}")]
    FieldUpdate {
        field: &'static str,
        #[source]
        source: HookError,
    },

    #[error("field '{0}' is immutable, cannot be changed after creation")]
    ImmutableField(&'static str),
}

impl ReconcileError {
    /// Wrap a hook failure in the variant for the phase that ran it.
    pub(crate) fn from_hook(phase: Phase, field: &'static str, source: HookError) -> Self {
        match phase {
            Phase::Read => Self::FieldRead { field, source },
            Phase::Create => Self::FieldCreate { field, source },
            Phase::Update => Self::FieldUpdate { field, source },
            Phase::Delete => Self::FieldDelete { field, source },
        }
    }

    /// The offending field (the first of the pair for conflicts).
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ConflictingFields { first, .. } => first,
            Self::FieldCreate { field, .. }
            | Self::FieldDelete { field, .. }
            | Self::FieldRead { field, .. }
            | Self::FieldUpdate { field, .. } => field,
            Self::ImmutableField(field) => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_failures_map_to_their_phase() {
        let err = ReconcileError::from_hook(Phase::Read, "image", "bad upstream data".into());
        assert!(matches!(err, ReconcileError::FieldRead { field: "image", .. }));
        assert_eq!(err.field(), "image");
        assert_eq!(err.to_string(), "failed reading field 'image': bad upstream data");

        let err = ReconcileError::from_hook(Phase::Update, "image", "boom".into());
        assert!(matches!(err, ReconcileError::FieldUpdate { .. }));
    }

    #[test]
    fn constraint_errors_name_every_field_involved() {
        let err = ReconcileError::ConflictingFields {
            first: "low_priority_percentage",
            second: "od_count",
        };
        assert_eq!(
            err.to_string(),
            "fields 'low_priority_percentage' and 'od_count' are mutually exclusive"
        );
        assert_eq!(err.field(), "low_priority_percentage");

        let err = ReconcileError::ImmutableField("region");
        assert_eq!(
            err.to_string(),
            "field 'region' is immutable, cannot be changed after creation"
        );
    }
}
