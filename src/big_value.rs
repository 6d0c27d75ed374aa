// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{cmp::Ordering, fmt};


const LIMB_BITS: u32 = u32::BITS;
/// Largest power of ten that fits a limb; decimal rendering peels off this many digits at a time.
const DECIMAL_CHUNK: u32 = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

/// Exact nonnegative integer of unbounded magnitude.
///
/// Limbs are little-endian and normalized: the most significant limb is never
/// zero, so zero is the empty limb vector.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct BigValue { limbs: Vec<u32> }

impl BigValue {
	pub(crate) fn zero() -> Self {
		BigValue { limbs: vec![] }
	}

	pub(crate) fn one() -> Self {
		BigValue::from(1)
	}

	pub(crate) fn is_zero(&self) -> bool {
		self.limbs.is_empty()
	}

	fn normalize(&mut self) {
		while self.limbs.last() == Some(&0) { self.limbs.pop(); }
	}

	/// Returns `self + digit * weight`.
	pub(crate) fn add_scaled(mut self, digit: u32, weight: &BigValue) -> Self {
		if digit == 0 || weight.is_zero() { return self }
		if self.limbs.len() < weight.limbs.len() { self.limbs.resize(weight.limbs.len(), 0) }

		let mut carry = 0_u64;
		for (i, limb) in self.limbs.iter_mut().enumerate() {
			let w = weight.limbs.get(i).copied().unwrap_or(0) as u64;
			if w == 0 && carry == 0 && i >= weight.limbs.len() { break }
			// Fits: (2^32-1) + (2^32-1)^2 + (2^32-1) < 2^64
			let acc = *limb as u64 + w * digit as u64 + carry;
			*limb = acc as u32;
			carry = acc >> LIMB_BITS;
		}
		if carry != 0 { self.limbs.push(carry as u32) }
		self
	}

	/// Returns `self * factor`.
	pub(crate) fn multiply_small(mut self, factor: u32) -> Self {
		if factor == 0 { self.limbs.clear(); return self }

		let mut carry = 0_u64;
		for limb in self.limbs.iter_mut() {
			let acc = *limb as u64 * factor as u64 + carry;
			*limb = acc as u32;
			carry = acc >> LIMB_BITS;
		}
		if carry != 0 { self.limbs.push(carry as u32) }
		self
	}

	/// Divides in place, returning the remainder.
	fn div_rem_small(&mut self, divisor: u32) -> u32 {
		debug_assert_ne!(divisor, 0);
		let mut rem = 0_u64;
		for limb in self.limbs.iter_mut().rev() {
			let acc = (rem << LIMB_BITS) | *limb as u64;
			*limb = (acc / divisor as u64) as u32;
			rem = acc % divisor as u64;
		}
		self.normalize();
		rem as u32
	}

	pub(crate) fn to_decimal_string(&self) -> String {
		if self.is_zero() { return "0".to_owned() }

		let chunks = itertools::unfold(self.clone(), |rem| (!rem.is_zero())
				.then(|| rem.div_rem_small(DECIMAL_CHUNK)))
			.collect::<Vec<_>>();

		let mut rendered = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS);
		let mut chunks = chunks.into_iter().rev();
		if let Some(most_significant) = chunks.next() {
			rendered.push_str(&most_significant.to_string());
		}
		for chunk in chunks {
			rendered.push_str(&format!("{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS));
		}
		rendered
	}
}

impl From<u64> for BigValue {
	fn from(value: u64) -> Self {
		let mut big = BigValue { limbs: vec![value as u32, (value >> LIMB_BITS) as u32] };
		big.normalize();
		big
	}
}

impl Ord for BigValue {
	fn cmp(&self, other: &Self) -> Ordering {
		self.limbs.len().cmp(&other.limbs.len())
			.then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
	}
}

impl PartialOrd for BigValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl fmt::Display for BigValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(&self.to_decimal_string())
	}
}

impl fmt::Debug for BigValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BigValue({self})")
	}
}
