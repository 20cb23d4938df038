//! Collage entries and their identity tokens

use std::fmt;

/// Opaque identity token for one entry of a collage
///
/// Tokens are issued by the owning [`CollageModel`](crate::model::CollageModel)
/// at insertion time and are never reused within that model, so hosts can
/// keep them across reorders and removals of other entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value of the token
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One image held by a collage together with its identity token
///
/// The image handle is opaque to the model: it is stored and handed back,
/// never decoded or transformed.
#[derive(Debug, Clone)]
pub struct CollageEntry<I> {
    id: EntryId,
    image: I,
}

impl<I> CollageEntry<I> {
    pub(crate) const fn new(id: EntryId, image: I) -> Self {
        Self { id, image }
    }

    /// Identity token of this entry
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Borrow the image handle
    pub const fn image(&self) -> &I {
        &self.image
    }

    /// Take back ownership of the image handle
    pub fn into_image(self) -> I {
        self.image
    }
}
