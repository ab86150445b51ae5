#![cfg(test)]

// Property tests for Chain kept inside the crate so they can exercise the
// cursor API without feature gates.

use crate::chain::{Chain, Cursor};
use crate::error::Error;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Insert(usize, i32),
    Remove(usize),
    Clear,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        4 => any::<i32>().prop_map(Op::PushFront),
        4 => any::<i32>().prop_map(Op::PushBack),
        3 => Just(Op::PopFront),
        3 => Just(Op::PopBack),
        4 => (0usize..16, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        4 => (0usize..16).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ];
    proptest::collection::vec(op, 1..80)
}

fn cursor_at(chain: &Chain<i32>, index: usize) -> Cursor {
    let mut at = chain.first();
    for _ in 0..index {
        at = chain.next(at);
    }
    at
}

// Property: State-machine equivalence against VecDeque. Invariants
// exercised across random operation sequences:
// - Insert/remove at arbitrary cursors keep order identical to the model.
// - remove returns the cursor of the following element (end at the tail).
// - Forward and backward traversals agree with the model after every op.
// - front/back mirror the model, erroring exactly when empty.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_chain_matches_deque(ops in arb_ops()) {
        let mut sut: Chain<i32> = Chain::new();
        let mut model: VecDeque<i32> = VecDeque::new();

        for op in ops {
            match op {
                Op::PushFront(v) => {
                    sut.push_front(v);
                    model.push_front(v);
                }
                Op::PushBack(v) => {
                    sut.push_back(v);
                    model.push_back(v);
                }
                Op::PopFront => {
                    prop_assert_eq!(sut.pop_front(), model.pop_front());
                }
                Op::PopBack => {
                    prop_assert_eq!(sut.pop_back(), model.pop_back());
                }
                Op::Insert(i, v) => {
                    let i = i % (model.len() + 1);
                    let new = sut.insert(cursor_at(&sut, i), v);
                    prop_assert_eq!(sut.get(new), Some(&v));
                    model.insert(i, v);
                }
                Op::Remove(i) => {
                    if model.is_empty() {
                        prop_assert!(sut.remove(Cursor::end()).is_end());
                    } else {
                        let i = i % model.len();
                        let following = sut.remove(cursor_at(&sut, i));
                        model.remove(i);
                        if i == model.len() {
                            prop_assert!(following.is_end());
                        } else {
                            prop_assert_eq!(sut.get(following), model.get(i));
                        }
                    }
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }

            // Post-conditions after each op.
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            let forward: Vec<i32> = sut.iter().copied().collect();
            let expected: Vec<i32> = model.iter().copied().collect();
            prop_assert_eq!(forward, expected);
            let backward: Vec<i32> = sut.iter().rev().copied().collect();
            let reversed: Vec<i32> = model.iter().rev().copied().collect();
            prop_assert_eq!(backward, reversed);
            match model.front() {
                Some(v) => prop_assert_eq!(sut.front(), Ok(v)),
                None => prop_assert_eq!(sut.front(), Err(Error::EmptyContainer)),
            }
            match model.back() {
                Some(v) => prop_assert_eq!(sut.back(), Ok(v)),
                None => prop_assert_eq!(sut.back(), Err(Error::EmptyContainer)),
            }
        }
    }
}

// Property: clone_from always leaves the destination element-for-element
// equal to the source, whatever the starting lengths, reusing the shared
// prefix of nodes.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_clone_from_matches_source(
        dst in proptest::collection::vec(any::<i32>(), 0..12),
        src in proptest::collection::vec(any::<i32>(), 0..12),
    ) {
        let mut chain: Chain<i32> = dst.into_iter().collect();
        let source: Chain<i32> = src.iter().copied().collect();
        chain.clone_from(&source);
        prop_assert_eq!(chain.len(), source.len());
        let got: Vec<i32> = chain.iter().copied().collect();
        prop_assert_eq!(got, src);
    }
}
