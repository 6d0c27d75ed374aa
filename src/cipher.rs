// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::str::FromStr;


pub(crate) const MAX_LEN: usize = 19;
pub(crate) const MAX_DISTINCT: usize = 10;

/// Alphanumeric byte; case-sensitive.
pub(crate) type Symbol = u8;

pub(crate) fn is_symbol(b: u8) -> bool {
	b.is_ascii_alphanumeric()
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum InputViolation {
	#[error("cipher has {len} symbols, expected 1 to {max}")]
	Length { len: usize, max: usize },
	#[error("invalid symbol '{}' at column {column}", .byte.escape_ascii())]
	Symbol { column: usize, byte: u8 },
	#[error("cipher has {count} distinct symbols, at most {} allowed", MAX_DISTINCT)]
	Distinct { count: usize },
}

/// Validated input string: 1 to [`MAX_LEN`] symbols, at most [`MAX_DISTINCT`] distinct.
#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Cipher(Box<[Symbol]>);

impl Cipher {
	pub(crate) fn symbols(&self) -> &[Symbol] {
		&self.0
	}

	pub(crate) fn len(&self) -> usize {
		self.0.len()
	}

	pub(crate) fn leading(&self) -> Symbol {
		self.0[0]
	}

	/// Distinct symbols in order of first appearance.
	pub(crate) fn distinct(&self) -> impl Iterator<Item = Symbol> + '_ {
		use itertools::Itertools as _;
		self.0.iter().copied().unique()
	}

	pub(crate) fn distinct_count(&self) -> usize {
		self.distinct().count()
	}

	/// Like [`TryFrom<&[u8]>`], with a tighter length limit.
	pub(crate) fn try_with_max_len(bytes: &[u8], max_len: usize) -> Result<Self, InputViolation> {
		use itertools::Itertools as _;
		let max_len = max_len.min(MAX_LEN);
		if bytes.is_empty() || bytes.len() > max_len { return Err(
			InputViolation::Length { len: bytes.len(), max: max_len }) }
		if let Some(p) = bytes.iter().position(|&b| !is_symbol(b)) { return Err(
			InputViolation::Symbol { column: p + 1, byte: bytes[p] }) }
		let count = bytes.iter().unique().count();
		if count > MAX_DISTINCT { return Err(InputViolation::Distinct { count }) }
		Ok(Cipher(bytes.into()))
	}
}

impl TryFrom<&[u8]> for Cipher {
	type Error = InputViolation;
	fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
		Cipher::try_with_max_len(bytes, MAX_LEN)
	}
}

impl FromStr for Cipher {
	type Err = InputViolation;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.as_bytes().try_into()
	}
}

impl std::fmt::Display for Cipher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		// Only ASCII alphanumerics get past validation
		self.0.iter().try_for_each(|&b| f.write_char(b.into()))
	}
}

impl std::fmt::Debug for Cipher {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Cipher({self})")
	}
}
