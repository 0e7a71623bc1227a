use std::ptr::NonNull;
use std::{rc, sync};

/// A value that can stand for "nothing".
///
/// Besides the obvious cases (`None`, null pointers) this covers handles that report themselves as
/// null once their target is gone: a `Weak` whose value was dropped is null, the same way an engine
/// object compares equal to null after it was destroyed.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nullable for rc::Weak<T> {
    fn is_null(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: ?Sized> Nullable for sync::Weak<T> {
    fn is_null(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &mut T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}
