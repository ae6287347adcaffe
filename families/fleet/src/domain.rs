//! Backend-facing domain model for a compute-fleet group.
//!
//! Deeply nested, all-optional structs in the SDK style: absent substructures
//! stay `None` until the owning field allocates them. The reconciliation
//! engine treats the whole graph as an opaque mutation target; persistence
//! belongs to the host's backend client.

use serde::{Deserialize, Serialize};

///
/// Group
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compute: Option<Compute>,
}

impl Group {
    /// Strategy zone, allocated on first write.
    pub fn strategy_mut(&mut self) -> &mut Strategy {
        self.strategy.get_or_insert_with(Strategy::default)
    }

    /// Capacity zone, allocated on first write.
    pub fn capacity_mut(&mut self) -> &mut Capacity {
        self.capacity.get_or_insert_with(Capacity::default)
    }

    /// Compute zone, allocated on first write.
    pub fn compute_mut(&mut self) -> &mut Compute {
        self.compute.get_or_insert_with(Compute::default)
    }

    /// VM-size zone, allocated on first write.
    pub fn vm_sizes_mut(&mut self) -> &mut VmSizes {
        self.compute_mut()
            .vm_sizes
            .get_or_insert_with(VmSizes::default)
    }

    /// Launch-specification zone, allocated on first write.
    pub fn launch_spec_mut(&mut self) -> &mut LaunchSpecification {
        self.compute_mut()
            .launch_specification
            .get_or_insert_with(LaunchSpecification::default)
    }

    #[must_use]
    pub fn launch_spec(&self) -> Option<&LaunchSpecification> {
        self.compute.as_ref()?.launch_specification.as_ref()
    }

    #[must_use]
    pub fn vm_sizes(&self) -> Option<&VmSizes> {
        self.compute.as_ref()?.vm_sizes.as_ref()
    }
}

///
/// Strategy
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Strategy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_priority_percentage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_demand_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draining_timeout: Option<i64>,
}

///
/// Capacity
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Capacity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
}

///
/// Compute
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Compute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_sizes: Option<VmSizes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_specification: Option<LaunchSpecification>,
}

///
/// VmSizes
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct VmSizes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_demand: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_priority: Option<Vec<String>>,
}

///
/// LaunchSpecification
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LaunchSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<Login>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancers_config: Option<LoadBalancersConfig>,
}

///
/// Image
///
/// Exactly one of `marketplace` or `custom` is set by a well-formed declared
/// block; the image field hook enforces that shape.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketplace: Option<MarketplaceImage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomImage>,
}

///
/// MarketplaceImage
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct MarketplaceImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

///
/// CustomImage
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct CustomImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name: Option<String>,
}

///
/// Login
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Login {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_public_key: Option<String>,
}

///
/// LoadBalancersConfig
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LoadBalancersConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<LoadBalancer>>,
}

///
/// LoadBalancer
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LoadBalancer {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balancer_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_set_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_weight: Option<bool>,
}
