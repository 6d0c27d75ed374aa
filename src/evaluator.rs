// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{assignment::DigitMap, big_value::BigValue, cipher::Cipher};


/// `base^0, base^1, …, base^(len - 1)`, by exact repeated multiplication.
pub(crate) fn place_weights(base: u32, len: usize) -> Vec<BigValue> {
	std::iter::successors(Some(BigValue::one()), |w| Some(w.clone().multiply_small(base)))
		.take(len)
		.collect()
}

/// Value of `cipher` read as a numeral in `base`, most significant symbol first.
pub(crate) fn evaluate(cipher: &Cipher, digits: &DigitMap, base: u32) -> BigValue {
	debug_assert!(base >= 2);
	debug_assert!(digits.max_digit().map_or(true, |d| (d as u32) < base));
	debug_assert_ne!(digits[cipher.leading()], 0, "leading zero");

	let weights = place_weights(base, cipher.len());
	cipher.symbols().iter()
		.zip(weights.iter().rev())
		.fold(BigValue::zero(), |acc, (&symbol, weight)|
			acc.add_scaled(digits[symbol] as u32, weight))
}
