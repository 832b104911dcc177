use std::any::{self, Any};
use std::fmt;

/// An owned, type-erased value stored in a [`TypeMap`](crate::TypeMap)
///
/// The box carries the vtable of the concrete type, so dropping an `Entry`
/// runs that type's destructor.
pub(crate) struct Entry {
    type_name: &'static str,
    value: Box<dyn Any>,
}

impl Entry {
    pub(crate) fn new<T: 'static>(value: T) -> Self {
        Self {
            type_name: any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.value.downcast_mut::<T>()
    }

    /// Moves the value out, consuming the entry
    pub(crate) fn into_inner<T: 'static>(self) -> Option<T> {
        self.value.downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Entry")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}
