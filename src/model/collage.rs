//! Ordered collage model with bounds-checked add, remove and move
//!
//! Insertion order is display order and export order. Every index operation
//! treats an out-of-range argument as a no-op instead of an error: hosts drive
//! these calls from pointer positions and drop targets, where a stale or
//! negative index is an expected input rather than a fault.

use std::fmt;

use crate::model::entry::{CollageEntry, EntryId};

/// Notification emitted after a mutation changed the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollageChange {
    /// An entry was appended at `index`
    Added {
        /// Token of the new entry
        id: EntryId,
        /// Position of the new entry (always the last one)
        index: usize,
    },
    /// The entry previously at `index` was deleted
    Removed {
        /// Token of the removed entry
        id: EntryId,
        /// Position the entry occupied before removal
        index: usize,
    },
    /// An entry changed position
    Moved {
        /// Token of the moved entry
        id: EntryId,
        /// Position before the move
        from: usize,
        /// Position after the move
        to: usize,
    },
}

type Observer = Box<dyn FnMut(&CollageChange) + Send>;

/// Ordered sequence of collage entries
pub struct CollageModel<I> {
    entries: Vec<CollageEntry<I>>,
    next_id: u64,
    observer: Option<Observer>,
}

impl<I> Default for CollageModel<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for CollageModel<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollageModel")
            .field("ids", &self.ids().collect::<Vec<_>>())
            .field("next_id", &self.next_id)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

// Converts a host-supplied index into a position inside `0..len`
fn checked_index(index: isize, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

impl<I> CollageModel<I> {
    /// Create an empty model
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            observer: None,
        }
    }

    /// Register a callback invoked after every mutation that changed the model
    ///
    /// Replaces any previously registered observer. Ignored operations do not
    /// notify.
    pub fn set_observer(&mut self, observer: impl FnMut(&CollageChange) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the registered observer, if any
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    fn notify(&mut self, change: CollageChange) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&change);
        }
    }

    /// Number of live entries
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the model holds no entries
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&CollageEntry<I>> {
        self.entries.get(index)
    }

    /// Entry carrying `id`, if still present
    pub fn get_by_id(&self, id: EntryId) -> Option<&CollageEntry<I>> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Current position of the entry carrying `id`
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &CollageEntry<I>> {
        self.entries.iter()
    }

    /// Identity tokens in display order
    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.entries.iter().map(CollageEntry::id)
    }

    /// Image handles in display order
    pub fn images(&self) -> impl Iterator<Item = &I> {
        self.entries.iter().map(CollageEntry::image)
    }

    /// Append an image as the last entry and return its new token
    pub fn add(&mut self, image: I) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(CollageEntry::new(id, image));

        let index = self.entries.len() - 1;
        self.notify(CollageChange::Added { id, index });
        id
    }

    /// Delete the entry at `index`, shifting later entries left by one
    ///
    /// Returns the removed entry, or `None` without touching the model when
    /// `index` lies outside `0..len` (negative indices included).
    pub fn remove(&mut self, index: isize) -> Option<CollageEntry<I>> {
        let index = checked_index(index, self.entries.len())?;
        let entry = self.entries.remove(index);

        self.notify(CollageChange::Removed {
            id: entry.id(),
            index,
        });
        Some(entry)
    }

    /// Delete the entry carrying `id`
    pub fn remove_id(&mut self, id: EntryId) -> Option<CollageEntry<I>> {
        let index = self.position(id)?;
        self.remove(isize::try_from(index).ok()?)
    }

    /// Move the entry at `from` so that it lands at `to`
    ///
    /// Ignored when `from == to`, when `from` lies outside `0..len`, or when
    /// `to` lies outside `0..=len`. Otherwise the entry is taken out and
    /// reinserted at `to` clamped to the length *after* removal, so
    /// `to == len` moves the entry to the last position. All other entries
    /// keep their relative order.
    ///
    /// Returns whether the entry ended up at a different position.
    pub fn move_entry(&mut self, from: isize, to: isize) -> bool {
        if from == to {
            return false;
        }
        let len = self.entries.len();
        let Some(from) = checked_index(from, len) else {
            return false;
        };
        let Some(to) = usize::try_from(to).ok().filter(|&t| t <= len) else {
            return false;
        };

        let entry = self.entries.remove(from);
        let landing = to.min(self.entries.len());
        let id = entry.id();
        self.entries.insert(landing, entry);

        if landing == from {
            return false;
        }
        self.notify(CollageChange::Moved {
            id,
            from,
            to: landing,
        });
        true
    }

    /// Move the entry carrying `id` to `to`, with the same rules as
    /// [`move_entry`](Self::move_entry)
    pub fn move_id(&mut self, id: EntryId, to: isize) -> bool {
        self.position(id)
            .and_then(|from| isize::try_from(from).ok())
            .is_some_and(|from| self.move_entry(from, to))
    }
}
