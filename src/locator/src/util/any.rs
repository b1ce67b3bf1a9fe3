use std::any::Any;
use std::ops::DerefMut;

pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Downcasts the pointee of an owning pointer such as `Box<dyn AsAny>`.
///
/// Calling [`AsAny::as_any_mut`] on the box itself would pick the box's own
/// impl and view the box, not the object inside it.
pub trait DowncastMut {
    fn downcast_mut<T: Any>(&mut self) -> Option<&mut T>;
}

impl<S> DowncastMut for S
where
    S: DerefMut<Target: AsAny>,
{
    #[inline]
    fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        (**self).as_any_mut().downcast_mut::<T>()
    }
}
