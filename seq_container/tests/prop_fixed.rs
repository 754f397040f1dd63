//! Property-based tests for FixedArray<T, N>

use proptest::prelude::*;
use seq_container::prelude::*;

const BOUND: usize = 12;

proptest! {
    // -------------------------------------------------------------
    // 1. Exactly BOUND appends succeed, the rest are rejected.
    // -------------------------------------------------------------
    #[test]
    fn prop_bound_is_respected(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut a = FixedArray::<i32, BOUND>::new();

        for (i, v) in values.iter().enumerate() {
            let accepted = a.push(*v);
            prop_assert_eq!(accepted, i < BOUND);
            prop_assert_eq!(a.len(), (i + 1).min(BOUND));
            prop_assert_eq!(a.capacity(), BOUND);
        }

        let kept = values.len().min(BOUND);
        prop_assert_eq!(a.as_slice(), &values[..kept]);
    }

    // -------------------------------------------------------------
    // 2. A rejected push leaves the contents untouched.
    // -------------------------------------------------------------
    #[test]
    fn prop_rejection_does_not_mutate(values in prop::array::uniform4(any::<u64>()), extra: u64) {
        let mut a = FixedArray::<u64, 4>::from_slice(&values).unwrap();
        let before = a;

        prop_assert!(!a.push(extra));
        prop_assert!(!a.push_ref(&extra));
        prop_assert!(a.try_push(extra).is_err());
        prop_assert!(a.try_extend_from_slice(&[extra]).is_err());
        prop_assert_eq!(a, before);
    }

    // -------------------------------------------------------------
    // 3. Checked reads see the last write to each slot.
    // -------------------------------------------------------------
    #[test]
    fn prop_last_write_wins(
        values in prop::collection::vec(any::<u16>(), 1..=BOUND),
        index in 0usize..BOUND,
        new_val: u16
    ) {
        let mut a = FixedArray::<u16, BOUND>::from_slice(&values).unwrap();
        let i = index % values.len();

        a.write(i, new_val).unwrap();
        prop_assert_eq!(a.at(i), new_val);

        a[i] = new_val.wrapping_add(1);
        prop_assert_eq!(*a.at_ref(i), new_val.wrapping_add(1));
    }

    // -------------------------------------------------------------
    // 4. Iteration covers [0, len) regardless of spare slots.
    // -------------------------------------------------------------
    #[test]
    fn prop_iteration_matches_len(values in prop::collection::vec(any::<u8>(), 0..=BOUND)) {
        let a = FixedArray::<u8, BOUND>::from_slice(&values).unwrap();

        let mut count = 0;
        for (i, v) in a.iter() {
            prop_assert_eq!(i, count);
            prop_assert_eq!(v, values[i]);
            count += 1;
        }
        prop_assert_eq!(count, a.len());
        prop_assert_eq!(a.iter().len(), a.len());
    }

    // -------------------------------------------------------------
    // 5. Growing past the bound is fatal; within it is a no-op.
    // -------------------------------------------------------------
    #[test]
    fn prop_ensure_capacity_contract(requested in 0usize..(BOUND * 2)) {
        let mut a = FixedArray::<u8, BOUND>::new();
        let result = std::panic::catch_unwind(move || {
            a.ensure_capacity(requested);
            a.capacity()
        });

        if requested <= BOUND {
            prop_assert_eq!(result.ok(), Some(BOUND));
        } else {
            prop_assert!(result.is_err());
        }
    }
}
