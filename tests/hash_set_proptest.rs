use chained_hashset::ChainedHashSet;
use proptest::prelude::*;
use std::collections::HashSet as StdHashSet;

// Model operations on ChainedHashSet through the public API only and assert
// membership parity plus traversal completeness against std's HashSet.
proptest! {
    #[test]
    fn prop_membership_parity(ops in proptest::collection::vec((0u8..=4u8, 0i32..64i32), 1..100)) {
        let mut set: ChainedHashSet<i32> = ChainedHashSet::new();
        let mut model: StdHashSet<i32> = StdHashSet::new();

        for (op, v) in ops {
            match op {
                // Insert; success iff the model did not already hold v.
                0 | 1 => {
                    let (pos, inserted) = set.insert(v);
                    prop_assert_eq!(inserted, model.insert(v));
                    prop_assert_eq!(set.get(pos), Some(&v));
                }
                // Remove; absentees come back as end.
                2 => {
                    let present = model.remove(&v);
                    let pos = set.remove(&v);
                    if !present {
                        prop_assert_eq!(pos, set.end());
                    }
                }
                // Membership probe.
                3 => {
                    prop_assert_eq!(set.contains(&v), model.contains(&v));
                }
                // Explicit growth; never shrinks, never changes membership.
                4 => {
                    let before = set.bucket_count();
                    set.rehash(v as usize % 48);
                    prop_assert!(set.bucket_count() >= before);
                }
                _ => unreachable!(),
            }

            prop_assert_eq!(set.len(), model.len());
        }

        // Final invariants: a position walk from first() visits exactly
        // len() elements, agrees with iter(), and reproduces the model.
        let mut walked = StdHashSet::new();
        let mut steps = 0usize;
        let mut at = set.first();
        while at != set.end() {
            walked.insert(*set.value(at).expect("non-end position dereferences"));
            steps += 1;
            at = set.next(at);
        }
        prop_assert_eq!(steps, set.len());
        prop_assert_eq!(&walked, &model);
        let iterated: StdHashSet<i32> = set.iter().copied().collect();
        prop_assert_eq!(&iterated, &model);
    }
}
