//! Shared fixture family for engine tests: a tiny two-affinity domain with
//! a conflict pair, an immutable field, a write-only field, and a field
//! with a delete hook.

use crate::prelude::*;

///
/// Fixture
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Fixture {
    pub tuning: Option<Tuning>,
    pub label: Option<String>,
    pub note: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Tuning {
    pub percentage: Option<f64>,
    pub count: Option<i64>,
    pub timeout: Option<i64>,
}

impl Fixture {
    fn tuning_mut(&mut self) -> &mut Tuning {
        self.tuning.get_or_insert_with(Tuning::default)
    }
}

const FIXTURE_TUNING: &str = "FixtureTuning";
const FIXTURE_META: &str = "FixtureMeta";

pub(crate) const PERCENTAGE: &str = "percentage";
pub(crate) const COUNT: &str = "count";
pub(crate) const TIMEOUT: &str = "timeout";
pub(crate) const LABEL: &str = "label";
pub(crate) const NOTE: &str = "note";

fn populate_percentage(fixture: &Fixture, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = fixture.tuning.as_ref().and_then(|t| t.percentage) {
        declared.set(PERCENTAGE, value);
    }
    Ok(())
}

fn apply_percentage(fixture: &mut Fixture, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(PERCENTAGE).and_then(ConfigValue::as_f64) {
        fixture.tuning_mut().percentage = Some(value);
    }
    Ok(())
}

fn populate_count(fixture: &Fixture, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = fixture.tuning.as_ref().and_then(|t| t.count) {
        declared.set(COUNT, value);
    }
    Ok(())
}

fn apply_count(fixture: &mut Fixture, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(COUNT).and_then(ConfigValue::as_i64) {
        fixture.tuning_mut().count = Some(value);
    }
    Ok(())
}

fn populate_timeout(fixture: &Fixture, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = fixture.tuning.as_ref().and_then(|t| t.timeout) {
        declared.set(TIMEOUT, value);
    }
    Ok(())
}

fn apply_timeout(fixture: &mut Fixture, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(TIMEOUT).and_then(ConfigValue::as_i64) {
        fixture.tuning_mut().timeout = Some(value);
    }
    Ok(())
}

fn populate_label(fixture: &Fixture, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = fixture.label.as_deref() {
        declared.set(LABEL, value);
    }
    Ok(())
}

fn apply_label(fixture: &mut Fixture, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(LABEL).and_then(ConfigValue::as_str) {
        fixture.label = Some(value.to_string());
    }
    Ok(())
}

fn apply_note(fixture: &mut Fixture, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(NOTE).and_then(ConfigValue::as_str) {
        fixture.note = Some(value.to_string());
    }
    Ok(())
}

fn delete_note(fixture: &mut Fixture) -> Result<(), HookError> {
    fixture.note = None;
    Ok(())
}

pub(crate) fn percentage_field() -> Field<Fixture> {
    Field::new(
        FIXTURE_TUNING,
        PERCENTAGE,
        FieldSchema::new(SchemaKind::Float).opt(),
        apply_percentage,
        apply_percentage,
    )
    .with_populate(populate_percentage)
    .conflicts_with(&[COUNT])
}

pub(crate) fn count_field() -> Field<Fixture> {
    Field::new(
        FIXTURE_TUNING,
        COUNT,
        FieldSchema::new(SchemaKind::Int).opt(),
        apply_count,
        apply_count,
    )
    .with_populate(populate_count)
    .conflicts_with(&[PERCENTAGE])
}

pub(crate) fn timeout_field() -> Field<Fixture> {
    Field::new(
        FIXTURE_TUNING,
        TIMEOUT,
        FieldSchema::new(SchemaKind::Int),
        apply_timeout,
        apply_timeout,
    )
    .with_populate(populate_timeout)
}

pub(crate) fn label_field() -> Field<Fixture> {
    Field::new(
        FIXTURE_META,
        LABEL,
        FieldSchema::new(SchemaKind::String),
        apply_label,
        apply_label,
    )
    .with_populate(populate_label)
    .immutable()
}

/// Write-only: no populate hook, plus the only delete hook in the fixture.
pub(crate) fn note_field() -> Field<Fixture> {
    Field::new(
        FIXTURE_META,
        NOTE,
        FieldSchema::new(SchemaKind::String),
        apply_note,
        apply_note,
    )
    .with_delete(delete_note)
}

fn populate_broken(_: &Fixture, _: &mut DeclaredConfig) -> Result<(), HookError> {
    Err("malformed upstream data".into())
}

fn apply_broken(_: &mut Fixture, _: &DeclaredConfig) -> Result<(), HookError> {
    Err("backend shape mismatch".into())
}

/// Every hook fails; used by the fail-fast dispatch tests.
pub(crate) fn broken_field() -> Field<Fixture> {
    Field::new(
        FIXTURE_META,
        "broken",
        FieldSchema::new(SchemaKind::String),
        apply_broken,
        apply_broken,
    )
    .with_populate(populate_broken)
}

/// Field whose ident fails registration; used by registry tests.
pub(crate) fn unnamed_field() -> Field<Fixture> {
    Field::new(
        FIXTURE_META,
        "",
        FieldSchema::new(SchemaKind::String),
        apply_note,
        apply_note,
    )
}

/// The full fixture registry in canonical order.
pub(crate) fn tuning_registry() -> Registry<Fixture> {
    let mut registry = Registry::new();
    registry
        .register(percentage_field())
        .expect("percentage registration should succeed");
    registry
        .register(count_field())
        .expect("count registration should succeed");
    registry
        .register(timeout_field())
        .expect("timeout registration should succeed");
    registry
        .register(label_field())
        .expect("label registration should succeed");
    registry
        .register(note_field())
        .expect("note registration should succeed");
    registry
        .validate()
        .expect("fixture registry should validate");

    registry
}
