//! # Matching - Slot Probe Order
//!
//! During a fixation, word slots are matched against the lexicon in the
//! order of their attentional proximity to the fixated slot: the fixated
//! word first, then its neighbors outward. Farther slots are processed
//! later, with weaker evidence.

/// Offsets probed around the fixated slot, in priority order
const SLOT_OFFSETS: [isize; 6] = [-1, 1, -2, 2, -3, 3];

/// Order in which word slots are matched against the lexicon.
///
/// Starts with the fixated slot, then walks outward. Offsets landing
/// outside `[0, n_words)` are skipped, never substituted, so the result
/// has no duplicates and every entry is a valid slot.
pub fn slot_matching_order(n_words: usize, fixated_slot: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(1 + SLOT_OFFSETS.len());
    if fixated_slot < n_words {
        order.push(fixated_slot);
    }

    for offset in SLOT_OFFSETS {
        let slot = fixated_slot as isize + offset;
        if slot >= 0 && (slot as usize) < n_words {
            order.push(slot as usize);
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_fixated_slot() {
        for fixated in 0..5 {
            let order = slot_matching_order(5, fixated);
            assert_eq!(order[0], fixated);
        }
    }

    #[test]
    fn test_alternates_outward() {
        let order = slot_matching_order(7, 3);
        assert_eq!(order, vec![3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    fn test_skips_out_of_range_offsets() {
        // fixated at the left edge: no negative slots appear
        assert_eq!(slot_matching_order(5, 0), vec![0, 1, 2, 3]);
        // fixated at the right edge: no slot beyond the window
        assert_eq!(slot_matching_order(5, 4), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_no_duplicates_and_in_range() {
        for n_words in 1..8 {
            for fixated in 0..n_words {
                let order = slot_matching_order(n_words, fixated);
                let mut seen = std::collections::HashSet::new();
                for slot in &order {
                    assert!(*slot < n_words, "slot {} out of range", slot);
                    assert!(seen.insert(*slot), "slot {} probed twice", slot);
                }
            }
        }
    }

    #[test]
    fn test_single_word_stimulus() {
        assert_eq!(slot_matching_order(1, 0), vec![0]);
    }
}
