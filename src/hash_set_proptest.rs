#![cfg(test)]

// Property tests for ChainedHashSet kept inside the crate so they can read
// bucket geometry directly.

use crate::hash_set::ChainedHashSet;
use crate::strategy::HashStrategy;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::HashSet as StdHashSet;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// values, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize),
    Remove(usize),
    Find(usize),
    Contains(usize),
    Clear,
    Rehash(usize),
    Reserve(usize),
    Audit,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<i32>, Vec<OpI>)> {
    proptest::collection::hash_set(any::<i32>(), 1..=8).prop_flat_map(|pool| {
        let pool: Vec<i32> = pool.into_iter().collect();
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            6 => idx.clone().prop_map(OpI::Insert),
            4 => idx.clone().prop_map(OpI::Remove),
            3 => idx.clone().prop_map(OpI::Find),
            3 => idx.clone().prop_map(OpI::Contains),
            1 => Just(OpI::Clear),
            2 => (0usize..48).prop_map(OpI::Rehash),
            2 => (0usize..24).prop_map(OpI::Reserve),
            3 => Just(OpI::Audit),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Shared driver so the default-hashed and collision-forced variants assert
// the same invariants:
// - Duplicate inserts are rejected and report the existing position.
// - find/contains parity with the model; remove returns end for absentees.
// - len equals the model's after every op; Audit additionally checks that
//   traversal yields exactly the model's membership, that per-bucket chain
//   lengths sum to len, and that each present value lives in the bucket
//   its hash selects while absent values miss.
fn run_scenario<H: HashStrategy<i32>>(
    sut: &mut ChainedHashSet<i32, H>,
    pool: &[i32],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: StdHashSet<i32> = StdHashSet::new();

    for op in ops {
        match op {
            OpI::Insert(i) => {
                let v = pool[i];
                let already = model.contains(&v);
                let (pos, inserted) = sut.insert(v);
                prop_assert_eq!(inserted, !already, "insert must fail only on duplicate");
                prop_assert_eq!(sut.get(pos), Some(&v));
                model.insert(v);
            }
            OpI::Remove(i) => {
                let v = pool[i];
                let present = model.remove(&v);
                let pos = sut.remove(&v);
                if !present {
                    prop_assert_eq!(pos, sut.end(), "removing an absentee returns end");
                }
                prop_assert!(!sut.contains(&v));
            }
            OpI::Find(i) => {
                let v = pool[i];
                let pos = sut.find(&v);
                if model.contains(&v) {
                    prop_assert_eq!(sut.get(pos), Some(&v));
                    prop_assert_eq!(pos.bucket(), sut.bucket_index(&v));
                } else {
                    prop_assert_eq!(pos, sut.end());
                }
            }
            OpI::Contains(i) => {
                let v = pool[i];
                prop_assert_eq!(sut.contains(&v), model.contains(&v));
            }
            OpI::Clear => {
                let buckets = sut.bucket_count();
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.bucket_count(), buckets, "clear keeps geometry");
            }
            OpI::Rehash(n) => {
                let before = sut.bucket_count();
                sut.rehash(n);
                if n <= before {
                    prop_assert_eq!(sut.bucket_count(), before, "rehash never shrinks");
                } else {
                    prop_assert_eq!(sut.bucket_count(), n);
                }
            }
            OpI::Reserve(n) => {
                let before = sut.bucket_count();
                sut.reserve(n);
                prop_assert!(sut.bucket_count() >= before);
            }
            OpI::Audit => {
                let seen: StdHashSet<i32> = sut.iter().copied().collect();
                prop_assert_eq!(&seen, &model, "traversal equals membership");
                prop_assert_eq!(sut.iter().count(), model.len(), "no element visited twice");
                let bucket_sum: usize = (0..sut.bucket_count()).map(|i| sut.bucket_len(i)).sum();
                prop_assert_eq!(bucket_sum, sut.len(), "chain lengths sum to len");
                for &v in pool {
                    let pos = sut.find(&v);
                    if model.contains(&v) {
                        prop_assert_eq!(pos.bucket(), sut.bucket_index(&v), "placement invariant");
                    } else {
                        prop_assert_eq!(pos, sut.end());
                    }
                }
            }
        }

        // Post-conditions after each op.
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: ChainedHashSet<i32> = ChainedHashSet::new();
        run_scenario(&mut sut, &pool, ops)?;
    }
}

// Collision variant: a constant hash forces every element into one chain,
// stressing the linear probe and the chain-relinking paths of remove.
#[derive(Clone, Default)]
struct ConstStrategy;
impl HashStrategy<i32> for ConstStrategy {
    fn hash(&self, _: &i32) -> u64 {
        0
    }
    fn equals(&self, a: &i32, b: &i32) -> bool {
        a == b
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let mut sut = ChainedHashSet::with_strategy(ConstStrategy);
        run_scenario(&mut sut, &pool, ops)?;
    }
}
