//! Load-balancer affinity field: the set of balancers fronting the fleet.

use crate::{
    affinity,
    domain::{Group, LoadBalancer, LoadBalancersConfig},
};
use fleetform::prelude::*;
use std::collections::BTreeMap;

pub const LOAD_BALANCER: &str = "load_balancer";
pub const TYPE: &str = "type";
pub const BALANCER_ID: &str = "balancer_id";
pub const TARGET_SET_ID: &str = "target_set_id";
pub const AUTO_WEIGHT: &str = "auto_weight";

pub(crate) fn register(registry: &mut Registry<Group>) -> Result<(), RegistryError> {
    registry.register(
        Field::new(
            affinity::LOAD_BALANCERS,
            LOAD_BALANCER,
            FieldSchema::new(SchemaKind::Block).many(),
            apply_load_balancers,
            apply_load_balancers,
        )
        .with_populate(populate_load_balancers),
    )?;

    Ok(())
}

fn populate_load_balancers(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(balancers) = group
        .launch_spec()
        .and_then(|l| l.load_balancers_config.as_ref())
        .and_then(|c| c.load_balancers.as_deref())
    {
        declared.set(LOAD_BALANCER, flatten_load_balancers(balancers));
    }
    Ok(())
}

fn apply_load_balancers(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(LOAD_BALANCER) {
        let balancers = expand_load_balancers(value)?;
        group.launch_spec_mut().load_balancers_config = Some(LoadBalancersConfig {
            load_balancers: Some(balancers),
        });
    }
    Ok(())
}

//
// Utils
//

fn expand_load_balancers(value: &ConfigValue) -> Result<Vec<LoadBalancer>, HookError> {
    let items = value
        .as_list()
        .ok_or("invalid load balancer configuration")?;

    let mut balancers = Vec::with_capacity(items.len());
    for item in items {
        let entry = item
            .as_block()
            .ok_or("invalid load balancer configuration")?;

        let mut balancer = LoadBalancer::default();
        if let Some(v) = get_str(entry, TYPE) {
            balancer.kind = Some(v.to_string());
        }
        if let Some(v) = get_str(entry, BALANCER_ID) {
            balancer.balancer_id = Some(v.to_string());
        }
        if let Some(v) = get_str(entry, TARGET_SET_ID) {
            balancer.target_set_id = Some(v.to_string());
        }
        if let Some(v) = entry.get(AUTO_WEIGHT).and_then(ConfigValue::as_bool) {
            balancer.auto_weight = Some(v);
        }

        balancers.push(balancer);
    }

    Ok(balancers)
}

fn flatten_load_balancers(balancers: &[LoadBalancer]) -> ConfigValue {
    let items = balancers
        .iter()
        .map(|balancer| {
            let mut entry = BTreeMap::new();
            if let Some(v) = balancer.kind.as_deref() {
                entry.insert(TYPE.to_string(), ConfigValue::from(v));
            }
            if let Some(v) = balancer.balancer_id.as_deref() {
                entry.insert(BALANCER_ID.to_string(), ConfigValue::from(v));
            }
            if let Some(v) = balancer.target_set_id.as_deref() {
                entry.insert(TARGET_SET_ID.to_string(), ConfigValue::from(v));
            }
            if let Some(v) = balancer.auto_weight {
                entry.insert(AUTO_WEIGHT.to_string(), ConfigValue::from(v));
            }
            ConfigValue::Block(entry)
        })
        .collect();

    ConfigValue::List(items)
}

fn get_str<'a>(block: &'a BTreeMap<String, ConfigValue>, key: &str) -> Option<&'a str> {
    block
        .get(key)
        .and_then(ConfigValue::as_str)
        .filter(|v| !v.is_empty())
}
