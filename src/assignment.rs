// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::cipher::{Cipher, Symbol};


/// Injective map from a cipher's distinct symbols to digits.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct DigitMap { digits: [Option<u8>; 128] }

impl DigitMap {
	/// Assigns `digits` to the cipher's distinct symbols in order of first appearance.
	///
	/// Panics if `digits` has fewer entries than the cipher has distinct symbols;
	/// surplus digits are ignored.
	pub(crate) fn from_first_appearance(cipher: &Cipher, digits: impl IntoIterator<Item = u8>) -> Self {
		let mut map = DigitMap { digits: [None; 128] };
		let mut digits = digits.into_iter();
		for symbol in cipher.distinct() {
			let digit = digits.next().unwrap_or_else(|| panic!(
				"No digit left for symbol {:?}", symbol as char));
			map.digits[symbol as usize] = Some(digit);
		}
		map
	}

	pub(crate) fn iter(&self) -> impl Iterator<Item = (Symbol, u8)> + '_ {
		self.digits.iter()
			.enumerate()
			.filter_map(|(s, d)| d.map(|d| (s as Symbol, d)))
	}

	pub(crate) fn max_digit(&self) -> Option<u8> {
		self.iter().map(|(_, d)| d).max()
	}
}

impl std::ops::Index<Symbol> for DigitMap {
	type Output = u8;
	fn index(&self, symbol: Symbol) -> &Self::Output {
		match self.digits.get(symbol as usize) {
			Some(Some(digit)) => digit,
			_ => panic!("Symbol {:?} is not mapped", symbol as char),
		}
	}
}

impl std::fmt::Debug for DigitMap {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter().map(|(s, d)| (s as char, d))).finish()
	}
}


/// Digits and base that together minimize a cipher's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Assignment {
	pub(crate) digits: DigitMap,
	pub(crate) base: u32,
}

/// Smallest base able to render `distinct` symbols with a nonzero leading digit.
pub(crate) fn min_base(distinct: usize) -> u32 {
	distinct.max(2) as u32
}

impl Assignment {
	/// Leading symbol gets 1, the next new symbol 0, and the `r`-th new symbol `r`.
	pub(crate) fn minimal(cipher: &Cipher) -> Self {
		let ranks = 0..cipher.distinct_count() as u8;
		let digits = DigitMap::from_first_appearance(cipher, ranks.map(|r| match r {
			0 => 1,
			1 => 0,
			r => r,
		}));
		Assignment { digits, base: min_base(cipher.distinct_count()) }
	}
}
