use crate::registry::{Registry, RegistryError};

///
/// ResourceFamily
///
/// One resource type's registration entry point: a stable label for
/// observability plus the call that builds the family's fully-populated,
/// validated registry. Hosts build the registry once at startup and treat
/// it as read-only for the process lifetime.
///

pub trait ResourceFamily {
    /// Domain object reconciled by this family.
    type Domain;

    /// Stable resource label used in events and diagnostics.
    const NAME: &'static str;

    /// Build the family's registry, in deliberate registration order.
    fn registry() -> Result<Registry<Self::Domain>, RegistryError>;
}
