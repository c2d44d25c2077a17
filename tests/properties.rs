//! Property tests checking the list tiers against straightforward models.

use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::VecDeque;

use chainlist::{Arena, ErrorKind, FixedArena, List, Node, OwnedList};

type EngineArena = FixedArena<Node<u32>>;

/// An operation in a random workload, mirrored against a `VecDeque` model.
#[derive(Debug, Clone)]
enum Op {
    PushBack(u32),
    PushFront(u32),
    PopBack,
    PopFront,
    RemoveAt(usize),
    Reverse,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::PushBack),
        4 => any::<u32>().prop_map(Op::PushFront),
        2 => Just(Op::PopBack),
        2 => Just(Op::PopFront),
        2 => (0usize..64).prop_map(Op::RemoveAt),
        1 => Just(Op::Reverse),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn push_back_preserves_order(values in vec(any::<u32>(), 0..64)) {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(values.len().max(1));
        for &v in &values {
            list.push_back(v).unwrap();
        }

        prop_assert_eq!(list.len(), values.len());
        let collected: Vec<_> = list.iter().copied().collect();
        prop_assert_eq!(collected, values);
    }

    #[test]
    fn push_front_reverses_order(values in vec(any::<u32>(), 0..64)) {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(values.len().max(1));
        for &v in &values {
            list.push_front(v).unwrap();
        }

        let collected: Vec<_> = list.iter().copied().collect();
        let expected: Vec<_> = values.iter().rev().copied().collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn forward_and_backward_iteration_agree(values in vec(any::<u32>(), 0..64)) {
        let list: OwnedList<u32> = values.iter().copied().collect();

        let forward: Vec<_> = list.iter().copied().collect();
        let mut backward: Vec<_> = list.iter().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn matches_vecdeque_model(ops in vec(op_strategy(), 0..256)) {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(256);
        let mut model: VecDeque<u32> = VecDeque::new();

        for op in ops {
            match op {
                Op::PushBack(v) => {
                    list.push_back(v).unwrap();
                    model.push_back(v);
                }
                Op::PushFront(v) => {
                    list.push_front(v).unwrap();
                    model.push_front(v);
                }
                Op::PopBack => {
                    let got = list.pop_back().ok();
                    prop_assert_eq!(got, model.pop_back());
                }
                Op::PopFront => {
                    let got = list.pop_front().ok();
                    prop_assert_eq!(got, model.pop_front());
                }
                Op::RemoveAt(i) => {
                    let got = list.at(i).and_then(|idx| list.remove(idx));
                    prop_assert_eq!(got, model.remove(i));
                }
                Op::Reverse => {
                    list.reverse();
                    model = model.into_iter().rev().collect();
                }
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
        }

        let collected: Vec<_> = list.iter().copied().collect();
        let expected: Vec<_> = model.into_iter().collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn reverse_is_involution(values in vec(any::<u32>(), 0..64)) {
        let mut list: OwnedList<u32> = values.iter().copied().collect();

        list.reverse();
        list.reverse();

        let collected: Vec<_> = list.iter().copied().collect();
        prop_assert_eq!(collected, values);
    }

    #[test]
    fn reverse_matches_reversed_vec(values in vec(any::<u32>(), 0..64)) {
        let mut list: OwnedList<u32> = values.iter().copied().collect();
        list.reverse();

        let collected: Vec<_> = list.iter().copied().collect();
        let expected: Vec<_> = values.into_iter().rev().collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn append_concatenates(
        left in vec(any::<u32>(), 0..32),
        right in vec(any::<u32>(), 0..32),
    ) {
        let mut a: OwnedList<u32> = OwnedList::with_capacity(64);
        for &v in &left {
            a.push_back(v).unwrap();
        }
        let mut b: OwnedList<u32> = right.iter().copied().collect();

        a.append(&mut b).unwrap();

        let collected: Vec<_> = a.iter().copied().collect();
        let expected: Vec<_> = left.iter().chain(right.iter()).copied().collect();
        prop_assert_eq!(collected, expected);
        prop_assert!(b.is_empty());
    }

    #[test]
    fn engine_splice_concatenates(
        left in vec(any::<u32>(), 0..32),
        right in vec(any::<u32>(), 0..32),
    ) {
        let mut arena = EngineArena::with_capacity(64);
        let mut a: List<u32, _> = List::new();
        let mut b: List<u32, _> = List::new();

        for &v in &left {
            a.try_push_back(&mut arena, v).unwrap();
        }
        for &v in &right {
            b.try_push_back(&mut arena, v).unwrap();
        }

        a.append(&mut arena, &mut b);

        let collected: Vec<_> = a.iter(&arena).copied().collect();
        let expected: Vec<_> = left.iter().chain(right.iter()).copied().collect();
        prop_assert_eq!(collected, expected);
        prop_assert!(b.is_empty());
        prop_assert_eq!(a.len(), arena.len());
    }

    #[test]
    fn detach_reattach_moves_one_element(
        values in vec(any::<u32>(), 1..32),
        pick in 0usize..32,
    ) {
        let pick = pick % values.len();

        let mut arena = EngineArena::with_capacity(32);
        let mut src: List<u32, _> = List::new();
        let mut dst: List<u32, _> = List::new();

        let mut indices = Vec::new();
        for &v in &values {
            indices.push(src.try_push_back(&mut arena, v).unwrap());
        }

        let node = src.detach(&mut arena, indices[pick]);
        dst.attach_back(&mut arena, node);

        prop_assert_eq!(src.len(), values.len() - 1);
        prop_assert_eq!(dst.len(), 1);
        prop_assert_eq!(dst.front(&arena), Some(&values[pick]));

        let remaining: Vec<_> = src.iter(&arena).copied().collect();
        let expected: Vec<_> = values
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != pick)
            .map(|(_, &v)| v)
            .collect();
        prop_assert_eq!(remaining, expected);
    }

    #[test]
    fn detach_discard_frees_the_slot(
        values in vec(any::<u32>(), 1..32),
        pick in 0usize..32,
    ) {
        let pick = pick % values.len();

        let mut arena = EngineArena::with_capacity(32);
        let mut list: List<u32, _> = List::new();

        let mut indices = Vec::new();
        for &v in &values {
            indices.push(list.try_push_back(&mut arena, v).unwrap());
        }

        let node = list.detach(&mut arena, indices[pick]);
        let value = node.discard(&mut arena);

        prop_assert_eq!(value, values[pick]);
        prop_assert_eq!(arena.len(), values.len() - 1);
        prop_assert_eq!(list.len(), values.len() - 1);
    }

    #[test]
    fn full_push_leaves_state_unchanged(values in vec(any::<u32>(), 1..16)) {
        let mut list: OwnedList<u32> = values.iter().copied().collect();

        // Collecting sizes capacity to fit exactly
        let before: Vec<_> = list.iter().copied().collect();
        let err = list.push_back(99).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::OutOfMemory);
        let after: Vec<_> = list.iter().copied().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn erase_walk_agrees_with_retain(values in vec(any::<u32>(), 0..48)) {
        let mut list: OwnedList<u32> = values.iter().copied().collect();

        // Erase every odd value, chaining positions through `erase`
        let mut pos = list.at(0);
        while let Some(idx) = pos {
            if list.get(idx).copied().unwrap() % 2 == 1 {
                pos = list.erase(Some(idx)).unwrap();
            } else {
                pos = list.next_index(idx);
            }
        }

        let collected: Vec<_> = list.iter().copied().collect();
        let expected: Vec<_> = values.into_iter().filter(|v| v % 2 == 0).collect();
        prop_assert_eq!(collected, expected);
    }

    #[test]
    fn indices_stay_stable_under_unrelated_removal(values in vec(any::<u32>(), 3..32)) {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(values.len());

        let mut indices = Vec::new();
        for &v in &values {
            indices.push(list.push_back(v).unwrap());
        }

        // Remove the middle element; every other handle still resolves
        let mid = values.len() / 2;
        list.remove(indices[mid]);

        for (i, &idx) in indices.iter().enumerate() {
            if i == mid {
                continue;
            }
            prop_assert_eq!(list.get(idx), Some(&values[i]));
        }
    }

    #[test]
    fn pop_empty_reports_empty_and_changes_nothing(cap in 1usize..16) {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(cap);
        list.push_back(7).unwrap();
        list.pop_front().unwrap();

        prop_assert_eq!(list.pop_front().unwrap_err().kind(), ErrorKind::Empty);
        prop_assert_eq!(list.pop_back().unwrap_err().kind(), ErrorKind::Empty);
        prop_assert_eq!(list.front().unwrap_err().kind(), ErrorKind::Empty);
        prop_assert!(list.is_empty());
        prop_assert_eq!(list.head(), None);
        prop_assert_eq!(list.tail(), None);
    }

    #[test]
    fn push_then_pop_back_restores_shape(values in vec(any::<u32>(), 1..32), extra in any::<u32>()) {
        let mut list: OwnedList<u32> = OwnedList::with_capacity(values.len() + 1);
        for &v in &values {
            list.push_back(v).unwrap();
        }

        let head = list.head();
        let tail = list.tail();
        let len = list.len();

        list.push_back(extra).unwrap();
        prop_assert_eq!(list.pop_back().unwrap(), extra);

        prop_assert_eq!(list.len(), len);
        prop_assert_eq!(list.head(), head);
        prop_assert_eq!(list.tail(), tail);
    }

    #[test]
    fn clone_equals_original(values in vec(any::<u32>(), 0..32)) {
        let original: OwnedList<u32> = values.iter().copied().collect();
        let copy = original.clone();

        prop_assert_eq!(&original, &copy);

        let a: Vec<_> = original.into_iter().collect();
        let b: Vec<_> = copy.into_iter().collect();
        prop_assert_eq!(a, b);
    }
}

mod scenarios {
    use chainlist::OwnedList;

    fn values(list: &OwnedList<u64>) -> Vec<u64> {
        list.iter().copied().collect()
    }

    #[test]
    fn mixed_push_order() {
        let mut list: OwnedList<u64> = OwnedList::with_capacity(4);
        list.push_back(10).unwrap();
        list.push_back(20).unwrap();
        list.push_front(5).unwrap();

        assert_eq!(values(&list), vec![5, 10, 20]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front().unwrap(), &5);
        assert_eq!(list.back().unwrap(), &20);
    }

    #[test]
    fn remove_by_handle() {
        let mut list: OwnedList<u64> = OwnedList::with_capacity(4);
        list.push_back(5).unwrap();
        let mid = list.push_back(10).unwrap();
        list.push_back(20).unwrap();

        assert_eq!(list.remove(mid), Some(10));
        assert_eq!(values(&list), vec![5, 20]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn append_two_lists() {
        let mut a: OwnedList<u64> = OwnedList::with_capacity(4);
        a.push_back(1).unwrap();
        a.push_back(2).unwrap();
        let mut b: OwnedList<u64> = (3..=4).collect();

        a.append(&mut b).unwrap();

        assert_eq!(values(&a), vec![1, 2, 3, 4]);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
    }

    #[test]
    fn error_location_is_the_callers_file() {
        let mut list: OwnedList<u64> = OwnedList::with_capacity(1);

        // Empty and out-of-memory failures both record this file, not a
        // frame inside the library.
        let err = list.pop_front().unwrap_err();
        assert!(err.location().file().ends_with("properties.rs"));

        list.push_back(1).unwrap();
        let err = list.push_back(2).unwrap_err();
        assert!(err.location().file().ends_with("properties.rs"));
    }

    #[test]
    fn reverse_four() {
        let mut list: OwnedList<u64> = (1..=4).collect();
        list.reverse();

        assert_eq!(values(&list), vec![4, 3, 2, 1]);
        assert_eq!(list.front().unwrap(), &4);
        assert_eq!(list.back().unwrap(), &1);
    }
}
