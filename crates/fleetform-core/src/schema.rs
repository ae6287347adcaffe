use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// SchemaKind
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum SchemaKind {
    Block,
    Bool,
    Float,
    Int,
    List,
    String,
}

///
/// Cardinality
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
pub enum Cardinality {
    #[default]
    One,
    Opt,
    Many,
}

///
/// FieldSchema
///
/// Shape descriptor for one declared attribute. Carried through to the host
/// engine's typing layer unmodified; the reconciliation engine itself reads
/// nothing from it beyond presence.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldSchema {
    pub kind: SchemaKind,
    pub cardinality: Cardinality,
    pub required: bool,
}

impl FieldSchema {
    #[must_use]
    pub const fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            cardinality: Cardinality::One,
            required: false,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn opt(mut self) -> Self {
        self.cardinality = Cardinality::Opt;
        self
    }

    #[must_use]
    pub const fn many(mut self) -> Self {
        self.cardinality = Cardinality::Many;
        self
    }
}
