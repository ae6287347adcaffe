//! Compute-fleet resource family for the fleetform engine: the `Group`
//! domain model plus one field module per affinity, registered in deliberate
//! order by [`group_registry`].

pub mod domain;
pub mod fields;

use crate::domain::Group;
use fleetform::prelude::*;

///
/// Affinities
///
/// One tag per nested substructure of [`Group`]. Fields sharing a tag share
/// an ownership zone; the zone's accessor on the domain model allocates the
/// substructure on first write.
///

pub mod affinity {
    pub const GROUP: &str = "FleetGroup";
    pub const STRATEGY: &str = "FleetStrategy";
    pub const CAPACITY: &str = "FleetCapacity";
    pub const VM_SIZES: &str = "FleetVmSizes";
    pub const LAUNCH: &str = "FleetLaunchSpecification";
    pub const LOAD_BALANCERS: &str = "FleetLoadBalancers";
}

/// Build the family's registry.
///
/// Registration order is the dispatch order: group identity first, then
/// strategy, capacity, VM sizes, launch specification, and load balancers.
pub fn group_registry() -> Result<Registry<Group>, RegistryError> {
    let mut registry = Registry::new();

    fields::group::register(&mut registry)?;
    fields::strategy::register(&mut registry)?;
    fields::capacity::register(&mut registry)?;
    fields::vm_sizes::register(&mut registry)?;
    fields::launch::register(&mut registry)?;
    fields::load_balancer::register(&mut registry)?;

    registry.validate()?;

    Ok(registry)
}

///
/// FleetFamily
///

pub struct FleetFamily;

impl ResourceFamily for FleetFamily {
    type Domain = Group;

    const NAME: &'static str = "fleet_group";

    fn registry() -> Result<Registry<Group>, RegistryError> {
        group_registry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_builds_and_validates() {
        let registry = group_registry().expect("family registry should build");

        assert_eq!(registry.len(), 14);
        assert!(registry.lookup(fields::strategy::OD_COUNT).is_some());
        assert!(registry.lookup("unknown_field").is_none());
    }

    #[test]
    fn registering_a_module_twice_is_a_startup_failure() {
        let mut registry = group_registry().expect("family registry should build");

        let err = fields::group::register(&mut registry)
            .expect_err("re-registering the group module should fail");
        assert_eq!(err, RegistryError::DuplicateField("name".to_string()));
    }

    #[test]
    fn conflict_metadata_is_wired_both_ways() {
        let registry = group_registry().expect("family registry should build");

        let lpp = registry
            .lookup(fields::strategy::LOW_PRIORITY_PERCENTAGE)
            .expect("percentage field should be registered");
        assert_eq!(lpp.conflict_targets(), &[fields::strategy::OD_COUNT]);

        let od = registry
            .lookup(fields::strategy::OD_COUNT)
            .expect("od_count field should be registered");
        assert_eq!(
            od.conflict_targets(),
            &[fields::strategy::LOW_PRIORITY_PERCENTAGE]
        );
    }
}
