//! Capacity affinity fields: instance-count bounds and target.

use crate::{affinity, domain::Group};
use fleetform::prelude::*;

pub const MINIMUM: &str = "minimum";
pub const MAXIMUM: &str = "maximum";
pub const TARGET: &str = "target";

pub(crate) fn register(registry: &mut Registry<Group>) -> Result<(), RegistryError> {
    registry.register(
        Field::new(
            affinity::CAPACITY,
            MINIMUM,
            FieldSchema::new(SchemaKind::Int).opt(),
            apply_minimum,
            apply_minimum,
        )
        .with_populate(populate_minimum),
    )?;

    registry.register(
        Field::new(
            affinity::CAPACITY,
            MAXIMUM,
            FieldSchema::new(SchemaKind::Int).opt(),
            apply_maximum,
            apply_maximum,
        )
        .with_populate(populate_maximum),
    )?;

    registry.register(
        Field::new(
            affinity::CAPACITY,
            TARGET,
            FieldSchema::new(SchemaKind::Int).required(),
            apply_target,
            apply_target,
        )
        .with_populate(populate_target),
    )?;

    Ok(())
}

fn populate_minimum(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = group.capacity.as_ref().and_then(|c| c.minimum) {
        declared.set(MINIMUM, value);
    }
    Ok(())
}

fn apply_minimum(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(MINIMUM).and_then(ConfigValue::as_i64) {
        group.capacity_mut().minimum = Some(value);
    }
    Ok(())
}

fn populate_maximum(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = group.capacity.as_ref().and_then(|c| c.maximum) {
        declared.set(MAXIMUM, value);
    }
    Ok(())
}

fn apply_maximum(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(MAXIMUM).and_then(ConfigValue::as_i64) {
        group.capacity_mut().maximum = Some(value);
    }
    Ok(())
}

fn populate_target(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = group.capacity.as_ref().and_then(|c| c.target) {
        declared.set(TARGET, value);
    }
    Ok(())
}

fn apply_target(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(TARGET).and_then(ConfigValue::as_i64) {
        group.capacity_mut().target = Some(value);
    }
    Ok(())
}
