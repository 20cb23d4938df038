//! Tests for collage entries and identity tokens

#[cfg(test)]
mod tests {
    use gridglue::model::{CollageModel, EntryId};
    use std::collections::HashSet;

    // Tests tokens are unique and increase with insertion
    // Verified by issuing a constant token
    #[test]
    fn test_tokens_unique_and_ordered() {
        let mut model = CollageModel::new();
        let ids: Vec<EntryId> = (0..50).map(|n| model.add(n)).collect();

        let unique: HashSet<EntryId> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ids.first().map(|id| id.get()), Some(0));
    }

    // Tests display format of a token
    // Verified by dropping the hash prefix
    #[test]
    fn test_token_display() {
        let mut model = CollageModel::new();
        model.add("skip");
        let id = model.add("keep");

        assert_eq!(id.to_string(), "#1");
    }

    // Tests entry accessors hand back the stored handle untouched
    // Verified by cloning a different handle into the entry
    #[test]
    fn test_entry_accessors() {
        let mut model = CollageModel::new();
        let id = model.add(String::from("photo.png"));

        let entry = model.get(0).unwrap();
        assert_eq!(entry.id(), id);
        assert_eq!(entry.image(), "photo.png");

        let owned = model.remove(0).unwrap().into_image();
        assert_eq!(owned, "photo.png");
        assert!(model.get(0).is_none());
    }
}
