use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// How a registered object is held and handed back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnershipKind {
    /// The registry owns the object and lends out borrowed views of it.
    Value,
    /// The object is behind an [`Arc`] co-owned by the registry and every
    /// handle resolved from it.
    Shared,
    /// The object lives elsewhere for `'static` and the registry only keeps
    /// its address.
    Pointer,
}

impl OwnershipKind {
    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Shared => "Shared",
            Self::Pointer => "Pointer",
        }
    }
}

impl Display for OwnershipKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_str())
    }
}

/// A form under which objects are registered and resolved.
///
/// Exactly three forms exist and the trait is sealed:
///
/// | form          | kind                       | resolved as    | resolved mutably as |
/// |---------------|----------------------------|----------------|---------------------|
/// | [`Value<T>`]  | [`OwnershipKind::Value`]   | `&'a T`        | `&'a mut T`         |
/// | [`Arc<T>`]    | [`OwnershipKind::Shared`]  | `Arc<T>`       | `Arc<T>`            |
/// | `&'static T`  | [`OwnershipKind::Pointer`] | `&'static T`   | `&'static T`        |
///
/// `T` is the [`Ownership::Pointee`] in every case, and may be unsized when
/// the form names an interface, e.g. `Arc<dyn Logger>`.
///
/// # Examples
///
/// ```rust
/// # use std::sync::Arc;
/// # use locator::ownership::{Ownership, OwnershipKind, Value};
/// assert_eq!(<Value<u8> as Ownership>::KIND, OwnershipKind::Value);
/// assert_eq!(<Arc<str> as Ownership>::KIND, OwnershipKind::Shared);
/// assert_eq!(<&'static str as Ownership>::KIND, OwnershipKind::Pointer);
/// ```
pub trait Ownership: sealed::Sealed + 'static {
    const KIND: OwnershipKind;

    /// The type of the object the form refers to.
    type Pointee: ?Sized + 'static;

    /// What a shared resolution yields.
    type Ref<'a>;

    /// What an exclusive resolution yields.
    type Mut<'a>;
}

/// A plain value owned by the registry.
///
/// `Value<T>` both wraps concrete values at registration time and names the
/// requested form at resolution time, where `T` may be a trait object:
///
/// ```rust
/// # use locator::container::Locator;
/// # use locator::ownership::Value;
/// # use locator::upcast::Upcast;
/// trait Shape: Send + Sync {
///     fn area(&self) -> f64;
/// }
///
/// struct Square(f64);
///
/// impl Shape for Square {
///     fn area(&self) -> f64 {
///         self.0 * self.0
///     }
/// }
///
/// impl Upcast<dyn Shape> for Square {
///     fn upcast_ref(&self) -> &(dyn Shape + 'static) {
///         self
///     }
///
///     fn upcast_mut(&mut self) -> &mut (dyn Shape + 'static) {
///         self
///     }
///
///     fn upcast_arc(self: std::sync::Arc<Self>) -> std::sync::Arc<dyn Shape> {
///         self
///     }
/// }
///
/// let locator = Locator::new();
/// locator.register::<Value<dyn Shape>, _>(Value(Square(2.0)));
/// let shape = locator.resolve::<Value<dyn Shape>>().unwrap();
/// assert_eq!(shape.area(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Value<T: ?Sized>(pub T);

impl<T> Value<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: ?Sized> Deref for Value<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: ?Sized> DerefMut for Value<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> Ownership for Value<T>
where
    T: ?Sized + 'static,
{
    const KIND: OwnershipKind = OwnershipKind::Value;

    type Pointee = T;

    type Ref<'a> = &'a T;

    type Mut<'a> = &'a mut T;
}

impl<T> Ownership for Arc<T>
where
    T: ?Sized + 'static,
{
    const KIND: OwnershipKind = OwnershipKind::Shared;

    type Pointee = T;

    type Ref<'a> = Arc<T>;

    type Mut<'a> = Arc<T>;
}

impl<T> Ownership for &'static T
where
    T: ?Sized + 'static,
{
    const KIND: OwnershipKind = OwnershipKind::Pointer;

    type Pointee = T;

    type Ref<'a> = &'static T;

    type Mut<'a> = &'static T;
}

mod sealed {
    use std::sync::Arc;

    use super::Value;

    pub trait Sealed {}

    impl<T: ?Sized + 'static> Sealed for Value<T> {}

    impl<T: ?Sized + 'static> Sealed for Arc<T> {}

    impl<T: ?Sized + 'static> Sealed for &'static T {}
}
