use std::sync::Arc;

/// States that `Self` is `I` or derives from `I`, and how to view it as `I`.
///
/// This is the subtype relation checked when an object of one type is
/// registered under another. Every type trivially derives from itself. Other
/// relations are declared per interface, usually with [`#[interface]`] on the
/// trait implementation, or by hand:
///
/// ```rust
/// # use std::sync::Arc;
/// # use locator::upcast::Upcast;
/// trait Greeter {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         String::from("hello")
///     }
/// }
///
/// impl Upcast<dyn Greeter> for English {
///     fn upcast_ref(&self) -> &(dyn Greeter + 'static) {
///         self
///     }
///
///     fn upcast_mut(&mut self) -> &mut (dyn Greeter + 'static) {
///         self
///     }
///
///     fn upcast_arc(self: Arc<Self>) -> Arc<dyn Greeter> {
///         self
///     }
/// }
///
/// let greeter = Upcast::<dyn Greeter>::upcast_arc(Arc::new(English));
/// assert_eq!(greeter.greet(), "hello");
/// ```
///
/// Registering an object under an interface it doesn't derive from is
/// rejected at compile time:
///
/// ```compile_fail
/// # use locator::container::Locator;
/// # use locator::ownership::Value;
/// trait Greeter {}
///
/// struct Stranger;
///
/// let locator = Locator::new();
/// locator.register::<Value<dyn Greeter>, _>(Value(Stranger));
/// ```
///
/// [`#[interface]`]: crate::interface
pub trait Upcast<I: ?Sized> {
    fn upcast_ref(&self) -> &I;

    fn upcast_mut(&mut self) -> &mut I;

    /// Converts the handle without touching the reference count, so the result
    /// co-owns the same object.
    fn upcast_arc(self: Arc<Self>) -> Arc<I>;
}

impl<T: ?Sized> Upcast<T> for T {
    #[inline]
    fn upcast_ref(&self) -> &T {
        self
    }

    #[inline]
    fn upcast_mut(&mut self) -> &mut T {
        self
    }

    #[inline]
    fn upcast_arc(self: Arc<Self>) -> Arc<T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Named: Send + Sync {
        fn name(&self) -> &str;

        fn rename(&mut self, name: &str);
    }

    struct Item {
        name: String,
    }

    impl Named for Item {
        fn name(&self) -> &str {
            &self.name
        }

        fn rename(&mut self, name: &str) {
            self.name = name.to_owned();
        }
    }

    impl Upcast<dyn Named> for Item {
        fn upcast_ref(&self) -> &(dyn Named + 'static) {
            self
        }

        fn upcast_mut(&mut self) -> &mut (dyn Named + 'static) {
            self
        }

        fn upcast_arc(self: Arc<Self>) -> Arc<dyn Named> {
            self
        }
    }

    #[test]
    fn upcast_reflexive_succeeds() {
        let mut value = 41;
        *Upcast::<i32>::upcast_mut(&mut value) += 1;
        assert_eq!(*Upcast::<i32>::upcast_ref(&value), 42);

        let handle: Arc<str> = Arc::from("str");
        let upcast = Upcast::<str>::upcast_arc(Arc::clone(&handle));
        assert!(Arc::ptr_eq(&handle, &upcast));
    }

    #[test]
    fn upcast_to_trait_object_succeeds() {
        let mut item = Item {
            name: String::from("item"),
        };
        Upcast::<dyn Named>::upcast_mut(&mut item).rename("renamed");
        assert_eq!(Upcast::<dyn Named>::upcast_ref(&item).name(), "renamed");

        let handle = Arc::new(item);
        let named = Upcast::<dyn Named>::upcast_arc(Arc::clone(&handle));
        assert_eq!(Arc::strong_count(&handle), 2);
        assert_eq!(named.name(), "renamed");
    }
}
