use crate::{config::DeclaredConfig, error::HookError, schema::FieldSchema};
use std::fmt;

/// Projects domain state into the declared snapshot. Read-only with respect
/// to the domain object.
pub type PopulateFn<D> = fn(&D, &mut DeclaredConfig) -> Result<(), HookError>;

/// Applies the declared snapshot onto the domain object (create and update
/// share this shape; both must behave as idempotent upserts).
pub type ApplyFn<D> = fn(&mut D, &DeclaredConfig) -> Result<(), HookError>;

/// Clears auxiliary local state owned by this field.
pub type DeleteFn<D> = fn(&mut D) -> Result<(), HookError>;

///
/// Field
///
/// One mapping unit between a declared configuration attribute and a domain
/// object substructure. Create and update hooks are mandatory; a field
/// without a populate hook is write-only and is skipped during the read
/// phase; a field without a delete hook is skipped during delete.
///

pub struct Field<D> {
    pub ident: &'static str,
    pub affinity: &'static str,
    pub schema: FieldSchema,
    populate: Option<PopulateFn<D>>,
    create: ApplyFn<D>,
    update: ApplyFn<D>,
    delete: Option<DeleteFn<D>>,
    immutable: bool,
    conflicts_with: &'static [&'static str],
}

impl<D> Field<D> {
    /// Build a descriptor from the mandatory pieces; optional hooks and
    /// constraint metadata chain on afterwards.
    #[must_use]
    pub const fn new(
        affinity: &'static str,
        ident: &'static str,
        schema: FieldSchema,
        create: ApplyFn<D>,
        update: ApplyFn<D>,
    ) -> Self {
        Self {
            ident,
            affinity,
            schema,
            populate: None,
            create,
            update,
            delete: None,
            immutable: false,
            conflicts_with: &[],
        }
    }

    #[must_use]
    pub const fn with_populate(mut self, hook: PopulateFn<D>) -> Self {
        self.populate = Some(hook);
        self
    }

    #[must_use]
    pub const fn with_delete(mut self, hook: DeleteFn<D>) -> Self {
        self.delete = Some(hook);
        self
    }

    /// Mark the field immutable: a changed declared value during update is a
    /// validation error, not a silent apply.
    #[must_use]
    pub const fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    /// Declare fields that may not be set together with this one.
    #[must_use]
    pub const fn conflicts_with(mut self, idents: &'static [&'static str]) -> Self {
        self.conflicts_with = idents;
        self
    }

    #[must_use]
    pub const fn is_immutable(&self) -> bool {
        self.immutable
    }

    #[must_use]
    pub const fn conflict_targets(&self) -> &'static [&'static str] {
        self.conflicts_with
    }

    #[must_use]
    pub const fn has_populate(&self) -> bool {
        self.populate.is_some()
    }

    pub(crate) const fn populate_hook(&self) -> Option<PopulateFn<D>> {
        self.populate
    }

    pub(crate) const fn create_hook(&self) -> ApplyFn<D> {
        self.create
    }

    pub(crate) const fn update_hook(&self) -> ApplyFn<D> {
        self.update
    }

    pub(crate) const fn delete_hook(&self) -> Option<DeleteFn<D>> {
        self.delete
    }
}

impl<D> Clone for Field<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Field<D> {}

impl<D> fmt::Debug for Field<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("ident", &self.ident)
            .field("affinity", &self.affinity)
            .field("schema", &self.schema)
            .field("immutable", &self.immutable)
            .field("conflicts_with", &self.conflicts_with)
            .finish_non_exhaustive()
    }
}
