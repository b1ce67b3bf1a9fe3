use std::any::Any;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::ownership::{Ownership, OwnershipKind};
use crate::resolver::{Resolver, TypedResolver};
use crate::util::any::AsAny;

/// An [`Entry`] whose requested form has been erased, so that entries of all
/// forms fit in one map.
pub trait ErasedEntry: AsAny + Debug + Send + Sync {
    fn kind(&self) -> OwnershipKind;
}

/// One registered object together with the [`Resolver`] that views it in the
/// requested form `R`.
pub struct Entry<R>
where
    R: Ownership + ?Sized,
{
    value: Box<dyn Any + Send + Sync>,
    resolver: Box<dyn Resolver<R>>,
}

impl<R> Entry<R>
where
    R: Ownership + ?Sized,
{
    pub fn new<S>(stored: S) -> Self
    where
        S: Ownership + Send + Sync,
        TypedResolver<S, R>: Resolver<R>,
    {
        Self {
            value: Box::new(stored),
            resolver: Box::new(TypedResolver::<S, R>::new()),
        }
    }

    pub fn extract(&self) -> Option<R::Ref<'_>> {
        self.resolver.resolve(self.value.as_ref())
    }

    pub fn extract_mut(&mut self) -> Option<R::Mut<'_>> {
        self.resolver.resolve_mut(self.value.as_mut())
    }
}

impl<R> Debug for Entry<R>
where
    R: Ownership + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Entry")
            .field("kind", &R::KIND)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl<R> ErasedEntry for Entry<R>
where
    R: Ownership + ?Sized,
{
    fn kind(&self) -> OwnershipKind {
        R::KIND
    }
}
