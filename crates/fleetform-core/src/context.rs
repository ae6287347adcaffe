use crate::config::DeclaredConfig;

///
/// ResourceContext
///
/// Wraps the mutable domain object and the declared snapshots for exactly
/// one lifecycle invocation, then is discarded. The exclusive borrow is the
/// "one owner, one operation, no reentrancy" rule made structural: a domain
/// object can never be shared across concurrent operations through this
/// type.
///

pub struct ResourceContext<'a, D> {
    domain: &'a mut D,
    desired: DeclaredConfig,
    prior: Option<DeclaredConfig>,
}

impl<'a, D> ResourceContext<'a, D> {
    /// Context for creating against a freshly-initialized domain object.
    #[must_use]
    pub const fn create(domain: &'a mut D, desired: DeclaredConfig) -> Self {
        Self {
            domain,
            desired,
            prior: None,
        }
    }

    /// Context for updating a hydrated domain object; `prior` is the
    /// declared configuration the object was last reconciled against.
    #[must_use]
    pub const fn update(
        domain: &'a mut D,
        desired: DeclaredConfig,
        prior: DeclaredConfig,
    ) -> Self {
        Self {
            domain,
            desired,
            prior: Some(prior),
        }
    }

    /// Context for projecting a hydrated domain object back into declared
    /// form.
    #[must_use]
    pub const fn read(domain: &'a mut D) -> Self {
        Self {
            domain,
            desired: DeclaredConfig::new(),
            prior: None,
        }
    }

    /// Context for clearing field-level auxiliary state before the host
    /// deletes the enclosing resource.
    #[must_use]
    pub const fn delete(domain: &'a mut D) -> Self {
        Self {
            domain,
            desired: DeclaredConfig::new(),
            prior: None,
        }
    }

    #[must_use]
    pub const fn domain(&self) -> &D {
        self.domain
    }

    #[must_use]
    pub const fn domain_mut(&mut self) -> &mut D {
        self.domain
    }

    #[must_use]
    pub const fn desired(&self) -> &DeclaredConfig {
        &self.desired
    }

    #[must_use]
    pub const fn prior(&self) -> Option<&DeclaredConfig> {
        self.prior.as_ref()
    }

    /// Split into disjoint borrows so a hook can mutate the domain while
    /// reading the desired snapshot.
    pub(crate) const fn parts(&mut self) -> (&mut D, &DeclaredConfig) {
        (self.domain, &self.desired)
    }
}
