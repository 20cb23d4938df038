//! Mutex-guarded collage handle for concurrent ingestion
//!
//! Image decoding runs off the thread that owns the collage, and several
//! decodes can complete at once. Funnelling every mutation through one lock
//! keeps appends atomic: order and length can never be observed half-updated.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::model::collage::CollageModel;
use crate::model::entry::EntryId;

/// Cloneable handle to a collage shared between threads
pub struct SharedCollage<I> {
    inner: Arc<Mutex<CollageModel<I>>>,
}

impl<I> Clone for SharedCollage<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I> fmt::Debug for SharedCollage<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedCollage").field(&*self.lock()).finish()
    }
}

impl<I> Default for SharedCollage<I> {
    fn default() -> Self {
        Self::new(CollageModel::new())
    }
}

impl<I> SharedCollage<I> {
    /// Wrap an existing model
    pub fn new(model: CollageModel<I>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(model)),
        }
    }

    // Model operations never leave the model half-updated, so a poisoned
    // lock still guards a consistent value.
    fn lock(&self) -> MutexGuard<'_, CollageModel<I>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an image while holding the lock
    pub fn add(&self, image: I) -> EntryId {
        self.lock().add(image)
    }

    /// Append several images as one contiguous run
    pub fn extend(&self, images: impl IntoIterator<Item = I>) -> Vec<EntryId> {
        let mut model = self.lock();
        images.into_iter().map(|image| model.add(image)).collect()
    }

    /// Number of live entries at the time of the call
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the collage is empty at the time of the call
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run `f` with exclusive access to the model
    pub fn with<R>(&self, f: impl FnOnce(&mut CollageModel<I>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Recover the model once every other handle has been dropped
    ///
    /// Returns the handle unchanged while clones are still alive.
    pub fn try_into_inner(self) -> Result<CollageModel<I>, Self> {
        Arc::try_unwrap(self.inner)
            .map(|mutex| mutex.into_inner().unwrap_or_else(PoisonError::into_inner))
            .map_err(|inner| Self { inner })
    }
}
