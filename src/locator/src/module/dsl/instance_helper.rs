use std::marker::PhantomData;

use crate::container::registry::{Registry, RegistryError};
use crate::ownership::Ownership;
use crate::resolver::{Resolver, TypedResolver};

pub struct InstanceBinding<R, S>
where
    R: Ownership + ?Sized,
    S: Ownership + Send + Sync,
    TypedResolver<S, R>: Resolver<R>,
{
    stored: S,
    _marker: PhantomData<fn(&R)>,
}

impl<R, S> InstanceBinding<R, S>
where
    R: Ownership + ?Sized,
    S: Ownership + Send + Sync,
    TypedResolver<S, R>: Resolver<R>,
{
    pub(super) fn new(stored: S) -> Self {
        Self {
            stored,
            _marker: PhantomData,
        }
    }

    /// Registers the instance, keeping any earlier registration of the same
    /// form.
    pub fn set_on<T>(self, target: &T)
    where
        T: AsRef<Registry> + ?Sized,
    {
        target.as_ref().register::<R, S>(self.stored);
    }

    /// Registers the instance.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyDuplicated`] if the form is already
    /// registered.
    pub fn try_set_on<T>(self, target: &T) -> Result<(), RegistryError>
    where
        T: AsRef<Registry> + ?Sized,
    {
        target.as_ref().try_register::<R, S>(self.stored)
    }
}
