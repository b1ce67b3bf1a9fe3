mod entry;

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use parking_lot::Mutex;
use snafu::prelude::*;

use crate::key::{self, TypeKey};
use crate::ownership::Ownership;
use crate::resolver::{Resolver, TypedResolver};
use crate::util::any::{AsAny, DowncastMut};

use entry::{Entry, ErasedEntry};

/// A map from requested forms to registered objects.
///
/// An object is registered under a requested form `R` ([`Value<I>`],
/// [`Arc<I>`] or `&'static I`) and later resolved by naming the same form.
/// The stored form `S` must be of the same kind, and its pointee must derive
/// from `I` through [`Upcast`].
///
/// Registrations are first-wins: once a form is registered, later
/// registrations of the same form are dropped and the entry is never removed
/// or replaced for the lifetime of the registry. This is what allows
/// [`Registry::resolve`] to hand out views borrowing the registry after its
/// lock has been released. Any method taking `&self` that removes or
/// replaces entries would break that.
///
/// [`Value<I>`]: crate::ownership::Value
/// [`Arc<I>`]: std::sync::Arc
/// [`Upcast`]: crate::upcast::Upcast
pub struct Registry {
    entries: Mutex<HashMap<TypeKey, Box<dyn ErasedEntry>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Registers `stored` under the requested form `R`. Does nothing if `R`
    /// is already registered.
    pub fn register<R, S>(&self, stored: S)
    where
        R: Ownership + ?Sized,
        S: Ownership + Send + Sync,
        TypedResolver<S, R>: Resolver<R>,
    {
        if let Err(err) = self.try_register::<R, S>(stored) {
            tracing::debug!(%err, "ignored duplicated registration, keeping the first one");
        }
    }

    /// Registers `stored` under its own form.
    pub fn register_self<S>(&self, stored: S)
    where
        S: Ownership + Send + Sync,
        TypedResolver<S, S>: Resolver<S>,
    {
        self.register::<S, S>(stored);
    }

    /// Registers `stored` under the requested form `R`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyDuplicated`] if `R` is already registered,
    /// in which case `stored` is dropped and the registry is unchanged.
    pub fn try_register<R, S>(&self, stored: S) -> Result<(), RegistryError>
    where
        R: Ownership + ?Sized,
        S: Ownership + Send + Sync,
        TypedResolver<S, R>: Resolver<R>,
    {
        let key = key::of::<R>();
        let entry: Box<dyn ErasedEntry> = Box::new(Entry::<R>::new(stored));
        let kind = entry.kind();

        let mut entries = self.entries.lock();
        ensure!(!entries.contains_key(&key), KeyDuplicatedSnafu { key });
        entries.insert(key, entry);
        drop(entries);

        tracing::debug!(%key, %kind, "registered entry");
        Ok(())
    }

    /// Resolves the object registered under the requested form `R`, or
    /// [`None`] if there is none.
    pub fn resolve<R>(&self) -> Option<R::Ref<'_>>
    where
        R: Ownership + ?Sized,
    {
        match self.require::<R>() {
            Ok(resolved) => Some(resolved),
            Err(err) => {
                tracing::trace!(%err, "resolution missed");
                None
            }
        }
    }

    /// Resolves the object registered under the requested form `R` with
    /// exclusive access, so that plain values can be mutated in place.
    pub fn resolve_mut<R>(&mut self) -> Option<R::Mut<'_>>
    where
        R: Ownership + ?Sized,
    {
        let key = key::of::<R>();
        let Some(entry) = self.entries.get_mut().get_mut(&key) else {
            tracing::trace!(%key, "resolution missed");
            return None;
        };
        entry.downcast_mut::<Entry<R>>()?.extract_mut()
    }

    /// Resolves the object registered under the requested form `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] if `R` is not registered, or
    /// [`ResolveError::TypeMismatch`] if the registered object can't be viewed
    /// as `R`.
    pub fn require<R>(&self) -> Result<R::Ref<'_>, ResolveError>
    where
        R: Ownership + ?Sized,
    {
        let key = key::of::<R>();
        let entry = self.lookup(&key).context(NotFoundSnafu { key })?;
        let resolved = entry
            .as_any()
            .downcast_ref::<Entry<R>>()
            .and_then(|entry| entry.extract())
            .context(TypeMismatchSnafu { key })?;

        tracing::trace!(%key, "resolved entry");
        Ok(resolved)
    }

    /// Returns true if an object is registered under the requested form `R`.
    pub fn can_resolve<R>(&self) -> bool
    where
        R: Ownership + ?Sized,
    {
        self.entries.lock().contains_key(&key::of::<R>())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    fn lookup(&self, key: &TypeKey) -> Option<&dyn ErasedEntry> {
        let entries = self.entries.lock();
        let entry: *const dyn ErasedEntry = &**entries.get(key)?;
        drop(entries);

        // SAFETY: Each entry is boxed, so its address is stable when the map
        // reallocates. While `self` is shared, entries are only ever inserted,
        // never removed or replaced, and mutable access to them requires
        // `&mut self`. So the entry stays valid and unaliased by `&mut` for
        // as long as `self` is borrowed.
        Some(unsafe { &*entry })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Registry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Registry")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl AsRef<Registry> for Registry {
    fn as_ref(&self) -> &Registry {
        self
    }
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RegistryError {
    #[snafu(display("the key {key} already exists in the registry"))]
    #[non_exhaustive]
    KeyDuplicated { key: TypeKey },
}

#[derive(Debug, Clone, Snafu)]
#[non_exhaustive]
pub enum ResolveError {
    #[snafu(display("could not find the object identified by the given key {key}"))]
    #[non_exhaustive]
    NotFound { key: TypeKey },
    #[snafu(display("could not view the object identified by {key} in the requested form"))]
    #[non_exhaustive]
    TypeMismatch { key: TypeKey },
}
