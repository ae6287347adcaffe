//! Strategy affinity fields: how the fleet splits between low-priority and
//! on-demand instances, and how draining is paced.

use crate::{affinity, domain::Group};
use fleetform::prelude::*;

pub const LOW_PRIORITY_PERCENTAGE: &str = "low_priority_percentage";
pub const OD_COUNT: &str = "od_count";
pub const DRAINING_TIMEOUT: &str = "draining_timeout";

pub(crate) fn register(registry: &mut Registry<Group>) -> Result<(), RegistryError> {
    registry.register(
        Field::new(
            affinity::STRATEGY,
            LOW_PRIORITY_PERCENTAGE,
            FieldSchema::new(SchemaKind::Float).opt(),
            apply_low_priority_percentage,
            apply_low_priority_percentage,
        )
        .with_populate(populate_low_priority_percentage)
        .conflicts_with(&[OD_COUNT]),
    )?;

    registry.register(
        Field::new(
            affinity::STRATEGY,
            OD_COUNT,
            FieldSchema::new(SchemaKind::Int).opt(),
            apply_od_count,
            apply_od_count,
        )
        .with_populate(populate_od_count)
        .conflicts_with(&[LOW_PRIORITY_PERCENTAGE]),
    )?;

    registry.register(
        Field::new(
            affinity::STRATEGY,
            DRAINING_TIMEOUT,
            FieldSchema::new(SchemaKind::Int).opt(),
            apply_draining_timeout,
            apply_draining_timeout,
        )
        .with_populate(populate_draining_timeout),
    )?;

    Ok(())
}

fn populate_low_priority_percentage(
    group: &Group,
    declared: &mut DeclaredConfig,
) -> Result<(), HookError> {
    if let Some(value) = group
        .strategy
        .as_ref()
        .and_then(|s| s.low_priority_percentage)
    {
        declared.set(LOW_PRIORITY_PERCENTAGE, value);
    }
    Ok(())
}

fn apply_low_priority_percentage(
    group: &mut Group,
    declared: &DeclaredConfig,
) -> Result<(), HookError> {
    if let Some(value) = declared
        .get(LOW_PRIORITY_PERCENTAGE)
        .and_then(ConfigValue::as_f64)
        .filter(|v| *v >= 0.0)
    {
        group.strategy_mut().low_priority_percentage = Some(value);
    }
    Ok(())
}

fn populate_od_count(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = group.strategy.as_ref().and_then(|s| s.on_demand_count) {
        declared.set(OD_COUNT, value);
    }
    Ok(())
}

fn apply_od_count(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(OD_COUNT).and_then(ConfigValue::as_i64) {
        group.strategy_mut().on_demand_count = Some(value);
    }
    Ok(())
}

fn populate_draining_timeout(
    group: &Group,
    declared: &mut DeclaredConfig,
) -> Result<(), HookError> {
    if let Some(value) = group.strategy.as_ref().and_then(|s| s.draining_timeout) {
        declared.set(DRAINING_TIMEOUT, value);
    }
    Ok(())
}

fn apply_draining_timeout(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(DRAINING_TIMEOUT).and_then(ConfigValue::as_i64) {
        group.strategy_mut().draining_timeout = Some(value);
    }
    Ok(())
}
