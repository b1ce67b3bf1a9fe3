use std::any::{self, Any};
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::ownership::{Ownership, Value};
use crate::upcast::Upcast;

/// A strategy that views a type-erased stored object in the requested form
/// `R`.
///
/// Both methods return [`None`] rather than panicking if `stored` turns out
/// not to hold what the resolver expects.
///
/// Usually, you don't need to implement [`Resolver`] manually. A
/// [`TypedResolver`] is chosen for every registration.
pub trait Resolver<R>: Debug + Send + Sync + 'static
where
    R: Ownership + ?Sized,
{
    fn resolve<'a>(&self, stored: &'a (dyn Any + Send + Sync)) -> Option<R::Ref<'a>>;

    fn resolve_mut<'a>(&self, stored: &'a mut (dyn Any + Send + Sync)) -> Option<R::Mut<'a>>;
}

/// The [`Resolver`] bound to a fixed pair of stored form `S` and requested
/// form `R`.
///
/// It only implements [`Resolver<R>`] when `S` and `R` are of the same
/// [`OwnershipKind`] and `S`'s pointee derives from `R`'s, so mixing
/// kinds is rejected at compile time:
///
/// ```compile_fail
/// # use std::sync::Arc;
/// # use locator::container::Locator;
/// # use locator::ownership::Value;
/// let locator = Locator::new();
/// locator.register::<Value<i32>, _>(Arc::new(42i32));
/// ```
///
/// [`OwnershipKind`]: crate::ownership::OwnershipKind
pub struct TypedResolver<S, R: ?Sized> {
    _marker: PhantomData<(fn(&S), fn(&R))>,
}

impl<S, R: ?Sized> TypedResolver<S, R> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S, R: ?Sized> Default for TypedResolver<S, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, R: ?Sized> Debug for TypedResolver<S, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "TypedResolver<{}, {}>",
            any::type_name::<S>(),
            any::type_name::<R>()
        )
    }
}

impl<T, I> Resolver<Value<I>> for TypedResolver<Value<T>, Value<I>>
where
    T: Upcast<I> + Send + Sync + 'static,
    I: ?Sized + 'static,
{
    fn resolve<'a>(&self, stored: &'a (dyn Any + Send + Sync)) -> Option<&'a I> {
        let value = stored.downcast_ref::<Value<T>>()?;
        Some(<T as Upcast<I>>::upcast_ref(&value.0))
    }

    fn resolve_mut<'a>(&self, stored: &'a mut (dyn Any + Send + Sync)) -> Option<&'a mut I> {
        let value = stored.downcast_mut::<Value<T>>()?;
        Some(<T as Upcast<I>>::upcast_mut(&mut value.0))
    }
}

impl<T, I> Resolver<Arc<I>> for TypedResolver<Arc<T>, Arc<I>>
where
    T: Upcast<I> + Send + Sync + ?Sized + 'static,
    I: ?Sized + 'static,
{
    fn resolve<'a>(&self, stored: &'a (dyn Any + Send + Sync)) -> Option<Arc<I>> {
        let handle = stored.downcast_ref::<Arc<T>>()?;
        Some(<T as Upcast<I>>::upcast_arc(Arc::clone(handle)))
    }

    fn resolve_mut<'a>(&self, stored: &'a mut (dyn Any + Send + Sync)) -> Option<Arc<I>> {
        self.resolve(stored)
    }
}

impl<T, I> Resolver<&'static I> for TypedResolver<&'static T, &'static I>
where
    T: Upcast<I> + Sync + ?Sized + 'static,
    I: ?Sized + 'static,
{
    fn resolve<'a>(&self, stored: &'a (dyn Any + Send + Sync)) -> Option<&'static I> {
        let pointer = stored.downcast_ref::<&'static T>()?;
        Some(<T as Upcast<I>>::upcast_ref(*pointer))
    }

    fn resolve_mut<'a>(&self, stored: &'a mut (dyn Any + Send + Sync)) -> Option<&'static I> {
        self.resolve(stored)
    }
}
