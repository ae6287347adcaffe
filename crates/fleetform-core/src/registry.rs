use crate::{MAX_FIELD_NAME_LEN, field::Field};
use std::collections::HashMap;
use thiserror::Error as ThisError;

///
/// RegistryError
///
/// Registration-time failures. These are programming errors in a resource
/// family's registration code and abort family initialization; they never
/// surface during lifecycle dispatch.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("field '{0}' already registered")]
    DuplicateField(String),

    #[error("invalid field ident '{0}'")]
    InvalidIdent(String),

    #[error("field '{field}' conflicts with unknown field '{target}'")]
    UnknownConflictTarget { field: String, target: String },
}

///
/// Registry
///
/// Ordered field set for one resource family, plus the name lookup index.
/// Registration order is the dispatch order and is significant: a field that
/// initializes a shared substructure must be registered before the fields
/// that attach entries to it. Built once at startup, read-only afterward.
///

pub struct Registry<D> {
    fields: Vec<Field<D>>,
    index: HashMap<&'static str, usize>,
}

impl<D> Registry<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, preserving call order.
    pub fn register(&mut self, field: Field<D>) -> Result<(), RegistryError> {
        if field.ident.is_empty() || field.ident.len() > MAX_FIELD_NAME_LEN {
            return Err(RegistryError::InvalidIdent(field.ident.to_string()));
        }
        if self.index.contains_key(field.ident) {
            return Err(RegistryError::DuplicateField(field.ident.to_string()));
        }

        self.index.insert(field.ident, self.fields.len());
        self.fields.push(field);

        Ok(())
    }

    /// Look up a descriptor by ident.
    #[must_use]
    pub fn lookup(&self, ident: &str) -> Option<&Field<D>> {
        self.index.get(ident).map(|i| &self.fields[*i])
    }

    /// Iterate descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Field<D>> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check registry-wide wiring: every conflict target must resolve to a
    /// registered field. Run once by the family's registration entry point.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for field in &self.fields {
            for target in field.conflict_targets() {
                if !self.index.contains_key(target) {
                    return Err(RegistryError::UnknownConflictTarget {
                        field: field.ident.to_string(),
                        target: (*target).to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl<D> Default for Registry<D> {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            index: HashMap::new(),
        }
    }
}
