// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Exhaustive search over digit permutations and bases. Factorial cost; tests only.

use crate::{assignment::{min_base, DigitMap}, big_value::BigValue, cipher::Cipher, evaluator};


pub(crate) const MAX_BASE: u32 = 100;

/// Every digit map permuting `0..distinct` (just `1` for a single symbol) that
/// keeps the leading digit nonzero.
fn digit_maps(cipher: &Cipher) -> impl Iterator<Item = DigitMap> + '_ {
	use {itertools::Itertools as _, either::Either};
	let distinct = cipher.distinct_count();
	let permutations = if distinct == 1 {
		Either::Left(std::iter::once(vec![1]))
	} else {
		Either::Right((0..distinct as u8).permutations(distinct))
	};
	permutations
		.map(move |digits| DigitMap::from_first_appearance(cipher, digits))
		.filter(move |digits| digits[cipher.leading()] != 0)
}

pub(crate) fn minimize_up_to(cipher: &Cipher, max_base: u32) -> BigValue {
	let min_base = min_base(cipher.distinct_count());
	assert!(max_base >= min_base);
	digit_maps(cipher)
		.flat_map(|digits| (min_base..=max_base)
			.map(move |base| evaluator::evaluate(cipher, &digits, base)))
		.min()
		.unwrap()
}

pub(crate) fn minimize(cipher: &Cipher) -> BigValue {
	minimize_up_to(cipher, MAX_BASE)
}


#[cfg(test)]
mod tests {
	use super::*;
	use {crate::encoder, itertools::Itertools as _, rayon::prelude::*};

	/// Every string over `alphabet` of length `1..=max_len`.
	fn all_strings(alphabet: &str, max_len: usize) -> Vec<String> {
		(1..=max_len)
			.flat_map(|len| std::iter::repeat(alphabet.chars())
				.take(len)
				.multi_cartesian_product()
				.map(String::from_iter))
			.collect()
	}

	fn assert_agrees(s: &str, max_base: u32) {
		let cipher = s.parse().unwrap();
		assert_eq!(encoder::minimize(&cipher), minimize_up_to(&cipher, max_base), "{s}");
	}

	#[test]
	fn samples() {
		let minimal = |s: &str| minimize(&s.parse().unwrap()).to_string();
		assert_eq!(minimal("aaaa"), "15");
		assert_eq!(minimal("ab"), "2");
		assert_eq!(minimal("aba"), "5");
		assert_eq!(minimal("z"), "1");
	}

	#[test]
	fn permutations() {
		let cipher = "abca".parse().unwrap();
		let maps = digit_maps(&cipher).collect::<Vec<_>>();
		// 3! orderings less the 2 with a leading zero
		assert_eq!(maps.len(), 4);
		assert!(maps.iter().all(|digits| digits[b'a'] != 0));
		assert_eq!(maps.iter().unique_by(|digits| format!("{digits:?}")).count(), 4);
	}

	#[test]
	fn three_symbols() {
		let strings = all_strings("abc", 6);
		assert_eq!(strings.len(), 3 + 9 + 27 + 81 + 243 + 729);
		strings.par_iter().for_each(|s| assert_agrees(s, MAX_BASE));
	}

	#[test]
	fn four_symbols() {
		all_strings("aB3z", 5).par_iter().for_each(|s| assert_agrees(s, 16));
	}

	#[test]
	fn length_eight() {
		[
			"abcdefgh", "hgfedcba", "abababab", "aaaaaaab", "baaaaaaa",
			"abcabcab", "a0a0a0a0", "abcdefga", "aabbccdd", "abcddcba",
			"Xyzzy123", "zzzzzzzz", "abbbbbbb", "12345678", "10000000",
		].par_iter().for_each(|s| assert_agrees(s, 12));
	}
}
