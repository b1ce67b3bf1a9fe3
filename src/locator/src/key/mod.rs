use std::any::{self, TypeId};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

/// A runtime token identifying a type, used to index entries in a
/// [`Registry`].
///
/// Two keys are equal if and only if they were built from the same type. The
/// type name is only kept for diagnostics and never takes part in comparison.
///
/// # Examples
///
/// ```rust
/// # use std::sync::Arc;
/// # use locator::key;
/// assert_eq!(key::of::<i32>(), key::of::<i32>());
/// assert_ne!(key::of::<i32>(), key::of::<Arc<i32>>());
/// assert_eq!(key::of::<i32>().to_string(), "i32");
/// ```
///
/// [`Registry`]: crate::container::registry::Registry
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn type_name(&self) -> &'static str {
        self.name
    }
}

impl Debug for TypeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}

impl Display for TypeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Returns the [`TypeKey`] of `T`.
pub fn of<T>() -> TypeKey
where
    T: ?Sized + 'static,
{
    TypeKey::of::<T>()
}
