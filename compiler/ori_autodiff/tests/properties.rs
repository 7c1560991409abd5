//! Property-based tests for parameter indices and their bit sets.
//!
//! Checks that the textual form round-trips and that equality and hashing
//! only look at which bits are set, not at the declared length.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

use ori_autodiff::{IndexBits, ParameterIndices};
use proptest::prelude::*;

fn hash_of<T: std::hash::Hash>(value: &T) -> u64 {
    BuildHasherDefault::<DefaultHasher>::default().hash_one(value)
}

// -- Strategies --

fn bits_strategy(max_len: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..=max_len)
}

/// Parameter indices whose textual form is long enough to parse.
fn indices_strategy() -> impl Strategy<Value = ParameterIndices> {
    (any::<bool>(), prop::collection::vec(any::<bool>(), 1..=150))
        .prop_map(|(is_method, bits)| ParameterIndices::from_bits(bits.into_iter().collect(), is_method))
}

fn flag_string_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[FM][SU]{1,80}").unwrap()
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Printing then parsing yields equal indices.
    #[test]
    fn prop_indices_round_trip(indices in indices_strategy()) {
        let text = indices.to_string();
        prop_assert_eq!(ParameterIndices::parse(&text), Some(indices));
    }

    /// Every well-formed string parses and prints back unchanged.
    #[test]
    fn prop_well_formed_strings_reprint(text in flag_string_strategy()) {
        let indices = ParameterIndices::parse(&text).unwrap();
        prop_assert_eq!(indices.to_string(), text);
    }

    /// Strings with a character outside the grammar are rejected.
    #[test]
    fn prop_foreign_flag_rejected(text in flag_string_strategy(), at in any::<prop::sample::Index>()) {
        let mut chars: Vec<char> = text.chars().collect();
        let pos = 1 + at.index(chars.len() - 1);
        chars[pos] = 'x';
        let corrupted: String = chars.into_iter().collect();
        prop_assert_eq!(ParameterIndices::parse(&corrupted), None);
    }

    /// Growing a bit set with unset bits keeps it equal, with the same hash.
    #[test]
    fn prop_trailing_zeros_insignificant(bits in bits_strategy(200), extra in 0usize..200) {
        let short: IndexBits = bits.iter().copied().collect();
        let mut long = short.clone();
        long.resize(short.len() + extra);

        prop_assert_eq!(&short, &long);
        prop_assert_eq!(hash_of(&short), hash_of(&long));
    }

    /// Two bit sets are equal exactly when they set the same positions.
    #[test]
    fn prop_equality_matches_set_positions(a in bits_strategy(130), b in bits_strategy(130)) {
        let lhs: IndexBits = a.iter().copied().collect();
        let rhs: IndexBits = b.iter().copied().collect();
        let same_ones = lhs.iter_ones().eq(rhs.iter_ones());

        prop_assert_eq!(lhs == rhs, same_ones);
    }

    /// `count_ones` agrees with the source vector.
    #[test]
    fn prop_count_ones(bits in bits_strategy(300)) {
        let set: IndexBits = bits.iter().copied().collect();
        prop_assert_eq!(set.count_ones(), bits.iter().filter(|&&b| b).count());
        prop_assert_eq!(set.len(), bits.len());
    }
}
