use crate::container::registry::{Registry, RegistryError, ResolveError};
use crate::ownership::Ownership;
use crate::resolver::{Resolver, TypedResolver};

/// The entry point of the crate: a service locator owning a [`Registry`].
///
/// A [`Locator`] is an explicitly owned value. Wrap it in an [`Arc`] to share
/// it between components or threads.
///
/// # Examples
///
/// ```rust
/// # use std::sync::Arc;
/// # use locator::container::Locator;
/// # use locator::ownership::Value;
/// let mut locator = Locator::new();
/// locator.register_self(Value(0u32));
/// locator.register_self(Arc::new(String::from("shared")));
///
/// *locator.resolve_mut::<Value<u32>>().unwrap() += 1;
/// assert_eq!(locator.resolve::<Value<u32>>(), Some(&1));
/// assert_eq!(locator.resolve::<Arc<String>>().as_deref().map(String::as_str), Some("shared"));
/// assert!(locator.resolve::<Value<String>>().is_none());
/// ```
///
/// [`Arc`]: std::sync::Arc
#[derive(Debug, Default)]
pub struct Locator {
    registry: Registry,
}

impl Locator {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: Registry::with_capacity(capacity),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn register<R, S>(&self, stored: S)
    where
        R: Ownership + ?Sized,
        S: Ownership + Send + Sync,
        TypedResolver<S, R>: Resolver<R>,
    {
        self.registry.register::<R, S>(stored);
    }

    pub fn register_self<S>(&self, stored: S)
    where
        S: Ownership + Send + Sync,
        TypedResolver<S, S>: Resolver<S>,
    {
        self.registry.register_self(stored);
    }

    pub fn try_register<R, S>(&self, stored: S) -> Result<(), RegistryError>
    where
        R: Ownership + ?Sized,
        S: Ownership + Send + Sync,
        TypedResolver<S, R>: Resolver<R>,
    {
        self.registry.try_register::<R, S>(stored)
    }

    pub fn resolve<R>(&self) -> Option<R::Ref<'_>>
    where
        R: Ownership + ?Sized,
    {
        self.registry.resolve::<R>()
    }

    pub fn resolve_mut<R>(&mut self) -> Option<R::Mut<'_>>
    where
        R: Ownership + ?Sized,
    {
        self.registry.resolve_mut::<R>()
    }

    pub fn require<R>(&self) -> Result<R::Ref<'_>, ResolveError>
    where
        R: Ownership + ?Sized,
    {
        self.registry.require::<R>()
    }

    pub fn can_resolve<R>(&self) -> bool
    where
        R: Ownership + ?Sized,
    {
        self.registry.can_resolve::<R>()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl From<Registry> for Locator {
    fn from(registry: Registry) -> Self {
        Self { registry }
    }
}

impl AsRef<Registry> for Locator {
    fn as_ref(&self) -> &Registry {
        &self.registry
    }
}
