use std::{
    cell::{Ref, RefCell, RefMut},
    fmt::{Debug, Error, Formatter},
    rc::Rc,
};

/// Shared ownership with interior mutability. Everything in the host object graph which can be
/// referenced from more than one place (classes, plain objects, method tables) lives in one of
/// these.
pub struct Container<T>(Rc<RefCell<T>>);

impl<T> Container<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// The stable address of the shared allocation. Used for object identity and for display of
    /// anonymous values.
    pub fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    /// Check whether two containers point at the same allocation. This is object identity, not
    /// value equality.
    pub fn same_identity(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl<T: Debug> Debug for Container<T> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        self.0.borrow().fmt(f)
    }
}
