//! Tests for the mutex-guarded collage handle under concurrent appends

#[cfg(test)]
mod tests {
    use gridglue::model::{CollageModel, EntryId, SharedCollage};
    use std::collections::HashSet;
    use std::thread;

    // Tests concurrent appends never lose or duplicate entries
    // Verified by appending without holding the lock
    #[test]
    fn test_concurrent_adds_keep_length_and_tokens() {
        let collage: SharedCollage<(usize, usize)> = SharedCollage::default();

        thread::scope(|scope| {
            for worker in 0..8 {
                let handle = collage.clone();
                scope.spawn(move || {
                    for item in 0..100 {
                        handle.add((worker, item));
                    }
                });
            }
        });

        assert_eq!(collage.len(), 800);
        let model = collage.try_into_inner().unwrap();
        let ids: HashSet<EntryId> = model.ids().collect();
        assert_eq!(ids.len(), 800);

        // Each worker's own appends stay in the order it issued them
        for worker in 0..8 {
            let items: Vec<usize> = model
                .images()
                .filter(|(w, _)| *w == worker)
                .map(|(_, item)| *item)
                .collect();
            assert_eq!(items, (0..100).collect::<Vec<_>>());
        }
    }

    // Tests extend appends one contiguous run even with concurrent writers
    // Verified by locking once per image in extend
    #[test]
    fn test_extend_is_contiguous() {
        let collage: SharedCollage<u32> = SharedCollage::default();

        thread::scope(|scope| {
            let background = collage.clone();
            scope.spawn(move || {
                for _ in 0..200 {
                    background.add(0);
                }
            });
            collage.extend(1..=50);
        });

        let values: Vec<u32> = collage.with(|model| model.images().copied().collect());
        let start = values.iter().position(|&v| v == 1).unwrap();
        let run: Vec<u32> = values.iter().skip(start).take(50).copied().collect();
        assert_eq!(run, (1..=50).collect::<Vec<_>>());
    }

    // Tests try_into_inner refuses while other handles are alive
    // Verified by unwrapping the Arc unconditionally
    #[test]
    fn test_try_into_inner_requires_sole_handle() {
        let mut model = CollageModel::new();
        model.add("a");
        let collage = SharedCollage::new(model);
        let other = collage.clone();

        let collage = collage.try_into_inner().unwrap_err();
        drop(other);

        let model = collage.try_into_inner().unwrap();
        assert_eq!(model.len(), 1);
    }

    // Tests with() gives mutable access to model operations
    // Verified by passing a copy of the model to the closure
    #[test]
    fn test_with_mutates_shared_model() {
        let collage = SharedCollage::default();
        collage.add("a");
        collage.add("b");

        let moved = collage.with(|model| model.move_entry(0, 2));

        assert!(moved);
        assert!(!collage.is_empty());
        let order: Vec<&str> = collage.with(|model| model.images().copied().collect());
        assert_eq!(order, vec!["b", "a"]);
    }
}
