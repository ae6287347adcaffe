//! Group-level identity fields.

use crate::{affinity, domain::Group};
use fleetform::prelude::*;

pub const NAME: &str = "name";
pub const REGION: &str = "region";

pub(crate) fn register(registry: &mut Registry<Group>) -> Result<(), RegistryError> {
    registry.register(
        Field::new(
            affinity::GROUP,
            NAME,
            FieldSchema::new(SchemaKind::String).required(),
            apply_name,
            apply_name,
        )
        .with_populate(populate_name),
    )?;

    // The backing region cannot move once the group exists.
    registry.register(
        Field::new(
            affinity::GROUP,
            REGION,
            FieldSchema::new(SchemaKind::String).required(),
            apply_region,
            apply_region,
        )
        .with_populate(populate_region)
        .immutable(),
    )?;

    Ok(())
}

fn populate_name(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = group.name.as_deref() {
        declared.set(NAME, value);
    }
    Ok(())
}

fn apply_name(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared
        .get(NAME)
        .and_then(ConfigValue::as_str)
        .filter(|v| !v.is_empty())
    {
        group.name = Some(value.to_string());
    }
    Ok(())
}

fn populate_region(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = group.region.as_deref() {
        declared.set(REGION, value);
    }
    Ok(())
}

fn apply_region(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared
        .get(REGION)
        .and_then(ConfigValue::as_str)
        .filter(|v| !v.is_empty())
    {
        group.region = Some(value.to_string());
    }
    Ok(())
}
