//! VM-size affinity fields: the size pools the fleet may launch into.

use crate::{affinity, domain::Group};
use fleetform::prelude::*;

pub const OD_SIZES: &str = "od_sizes";
pub const LOW_PRIORITY_SIZES: &str = "low_priority_sizes";

pub(crate) fn register(registry: &mut Registry<Group>) -> Result<(), RegistryError> {
    registry.register(
        Field::new(
            affinity::VM_SIZES,
            OD_SIZES,
            FieldSchema::new(SchemaKind::String).many().required(),
            apply_od_sizes,
            apply_od_sizes,
        )
        .with_populate(populate_od_sizes),
    )?;

    registry.register(
        Field::new(
            affinity::VM_SIZES,
            LOW_PRIORITY_SIZES,
            FieldSchema::new(SchemaKind::String).many(),
            apply_low_priority_sizes,
            apply_low_priority_sizes,
        )
        .with_populate(populate_low_priority_sizes),
    )?;

    Ok(())
}

fn populate_od_sizes(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(sizes) = group.vm_sizes().and_then(|v| v.on_demand.as_deref()) {
        declared.set(OD_SIZES, flatten_size_list(sizes));
    }
    Ok(())
}

fn apply_od_sizes(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(OD_SIZES) {
        let sizes = expand_size_list(OD_SIZES, value)?;
        group.vm_sizes_mut().on_demand = Some(sizes);
    }
    Ok(())
}

fn populate_low_priority_sizes(
    group: &Group,
    declared: &mut DeclaredConfig,
) -> Result<(), HookError> {
    if let Some(sizes) = group.vm_sizes().and_then(|v| v.low_priority.as_deref()) {
        declared.set(LOW_PRIORITY_SIZES, flatten_size_list(sizes));
    }
    Ok(())
}

fn apply_low_priority_sizes(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(LOW_PRIORITY_SIZES) {
        let sizes = expand_size_list(LOW_PRIORITY_SIZES, value)?;
        group.vm_sizes_mut().low_priority = Some(sizes);
    }
    Ok(())
}

//
// Utils
//

fn expand_size_list(ident: &str, value: &ConfigValue) -> Result<Vec<String>, HookError> {
    let items = value
        .as_list()
        .ok_or_else(|| format!("invalid {ident}: expected a list of size names"))?;

    let mut sizes = Vec::with_capacity(items.len());
    for item in items {
        let size = item
            .as_str()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| format!("invalid {ident}: size names must be non-empty strings"))?;
        sizes.push(size.to_string());
    }

    Ok(sizes)
}

fn flatten_size_list(sizes: &[String]) -> ConfigValue {
    ConfigValue::List(sizes.iter().map(|s| ConfigValue::from(s.as_str())).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_rejects_non_string_entries() {
        let value = ConfigValue::List(vec![
            ConfigValue::from("standard_ds2_v2"),
            ConfigValue::from(3),
        ]);

        let err = expand_size_list(OD_SIZES, &value)
            .expect_err("a numeric entry should fail expansion");
        assert_eq!(
            err.to_string(),
            "invalid od_sizes: size names must be non-empty strings"
        );
    }

    #[test]
    fn expand_and_flatten_invert() {
        let value = ConfigValue::List(vec![
            ConfigValue::from("standard_ds2_v2"),
            ConfigValue::from("standard_ds3_v2"),
        ]);

        let sizes = expand_size_list(OD_SIZES, &value).expect("string list should expand");
        assert_eq!(flatten_size_list(&sizes), value);
    }
}
