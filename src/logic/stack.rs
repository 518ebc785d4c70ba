//! Stack bookkeeping for the generate-and-sort demo.
//!
//! A stack is an ordered `Vec<StackEntry>`; the vector order is the
//! stacking order and `level` is the slot each entry is displayed at.
//! The scene sync in the demo maps `level` onto the Z axis.

use rand::seq::SliceRandom;
use rand::Rng;

/// One stackable box, independent of its visual representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackEntry {
    /// Construction index; unique within one generation.
    pub id: usize,
    /// Footprint edge length. Strictly increasing in `id` by construction.
    pub size: f32,
    /// Display slot along the stacking axis.
    pub level: f32,
}

/// Builds a fresh stack of `count` entries with strictly increasing sizes.
pub fn generate(count: usize) -> Vec<StackEntry> {
    (0..count)
        .map(|id| StackEntry {
            id,
            size: 0.5 + id as f32,
            level: id as f32,
        })
        .collect()
}

/// Puts the stack into a uniformly random order and re-slots every entry.
pub fn shuffle<R: Rng + ?Sized>(stack: &mut [StackEntry], rng: &mut R) {
    stack.shuffle(rng);
    reassign_levels(stack);
}

/// Sorts ascending by footprint size. Stable, so equal sizes keep their
/// relative order. Does not touch levels.
pub fn sort_by_size(stack: &mut [StackEntry]) {
    stack.sort_by(|a, b| a.size.total_cmp(&b.size));
}

/// Sorts descending by id, then re-slots every entry so the entry at
/// vector index `i` sits at level `i`.
pub fn sort_by_id(stack: &mut [StackEntry]) {
    stack.sort_by(|a, b| b.id.cmp(&a.id));
    reassign_levels(stack);
}

fn reassign_levels(stack: &mut [StackEntry]) {
    for (index, entry) in stack.iter_mut().enumerate() {
        entry.level = index as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generate_produces_increasing_unique_entries() {
        let stack = generate(5);
        assert_eq!(stack.len(), 5);
        for (i, entry) in stack.iter().enumerate() {
            assert_eq!(entry.id, i);
            assert_eq!(entry.level, i as f32);
        }
        for pair in stack.windows(2) {
            assert!(pair[0].size < pair[1].size);
        }
    }

    #[test]
    fn shuffle_is_a_permutation_with_contiguous_levels() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut stack = generate(8);
        shuffle(&mut stack, &mut rng);

        let mut ids: Vec<usize> = stack.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());

        for (index, entry) in stack.iter().enumerate() {
            assert_eq!(entry.level, index as f32);
        }
    }

    #[test]
    fn sort_by_size_orders_adjacent_pairs() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut stack = generate(6);
        shuffle(&mut stack, &mut rng);
        sort_by_size(&mut stack);
        for pair in stack.windows(2) {
            assert!(pair[0].size <= pair[1].size);
        }
    }

    #[test]
    fn sort_by_id_descends_and_reslots() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut stack = generate(6);
        shuffle(&mut stack, &mut rng);
        sort_by_id(&mut stack);
        for pair in stack.windows(2) {
            assert!(pair[0].id > pair[1].id);
        }
        for (index, entry) in stack.iter().enumerate() {
            assert_eq!(entry.level, index as f32);
        }
    }

    #[test]
    fn sort_sequence_puts_biggest_at_the_bottom() {
        // The demo's SORT action: size sort followed by id sort.
        let mut rng = StdRng::seed_from_u64(17);
        let mut stack = generate(5);
        shuffle(&mut stack, &mut rng);
        sort_by_size(&mut stack);
        sort_by_id(&mut stack);

        assert_eq!(stack[0].id, 4);
        assert_eq!(stack[0].level, 0.0);
        for pair in stack.windows(2) {
            assert!(pair[0].size > pair[1].size);
        }
    }
}
