use std::{
    rc::Rc,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// A single-threaded, reference-counted resource with interior mutability.
///
/// `StResource` provides interior mutability for a value of type `T` in a
/// single-threaded context. It uses `Rc<RwLock<T>>` internally: the editor
/// never leaves the render/input thread, so the atomic overhead of `Arc`
/// is not needed.
///
/// The world lives behind an `StResource` so that the editor state mutates
/// it between frames while the host renderer holds its own handle for
/// frame-plan consumption.
///
/// # Examples
///
/// ```
/// use tileworld::core::StResource;
///
/// let counter = StResource::new(0);
/// *counter.get_mut() += 1;
/// assert_eq!(*counter.get(), 1);
/// ```
///
/// # Panics
/// - Panics if a read guard is held while a write guard is requested on the
///   same thread, or vice versa.
pub struct StResource<T> {
    pub resource: Rc<RwLock<T>>,
}

impl<T> StResource<T> {
    /// Creates a new `StResource` containing the given value.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Rc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read-only guard for the contained value.
    ///
    /// # Panics
    /// Panics if the lock is poisoned or cannot be acquired.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource.read().unwrap()
    }

    /// Returns a writable guard for the contained value.
    ///
    /// # Panics
    /// Panics if the lock is poisoned or cannot be acquired.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource.write().unwrap()
    }
}

impl<T> Clone for StResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_same_value() {
        let resource = StResource::new(vec![1, 2, 3]);
        let clone = resource.clone();

        clone.get_mut().push(4);

        assert_eq!(resource.get().len(), 4);
    }
}
