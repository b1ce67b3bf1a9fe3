pub mod instance_helper;

use std::marker::PhantomData;

use instance_helper::InstanceBinding;

use crate::ownership::Ownership;
use crate::resolver::{Resolver, TypedResolver};

/// Starts a binding for the requested form `R`.
///
/// # Examples
///
/// ```rust
/// # use std::sync::Arc;
/// # use locator::container::Locator;
/// # use locator::module::bind;
/// let locator = Locator::new();
/// bind::<Arc<str>>().to_instance(Arc::<str>::from("shared")).set_on(&locator);
/// assert_eq!(locator.resolve::<Arc<str>>().as_deref(), Some("shared"));
/// ```
pub fn bind<R>() -> Binding<R>
where
    R: Ownership + ?Sized,
{
    Binding::new()
}

pub struct Binding<R>
where
    R: Ownership + ?Sized,
{
    _marker: PhantomData<fn(&R)>,
}

impl<R> Binding<R>
where
    R: Ownership + ?Sized,
{
    fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    pub fn to_instance<S>(self, stored: S) -> InstanceBinding<R, S>
    where
        S: Ownership + Send + Sync,
        TypedResolver<S, R>: Resolver<R>,
    {
        InstanceBinding::new(stored)
    }
}
