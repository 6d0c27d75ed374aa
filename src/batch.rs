// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::io::Write;
use crate::{cipher::{Cipher, InputViolation, MAX_LEN}, encoder};


/// Upper bounds on case count and cipher length for one input batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Limits {
	pub(crate) max_cases: usize,
	pub(crate) max_len: usize,
}

/// Batch 0 holds the samples.
const MAX_CASES: [usize; 9] = [3, 10, 10, 1_000, 10_000, 30_000, 30_000, 100_000, 100_000];
const MAX_LENS: [usize; 9] = [4, 4, 5, 6, 10, 10, 19, 19, 19];

impl Limits {
	pub(crate) fn for_batch(batch: usize) -> Option<Limits> {
		Some(Limits { max_cases: *MAX_CASES.get(batch)?, max_len: *MAX_LENS.get(batch)? })
	}
}

impl Default for Limits {
	fn default() -> Self {
		Limits { max_cases: usize::MAX, max_len: MAX_LEN }
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum BatchError {
	#[error("missing case count")]
	Header,
	#[error("invalid case count {token:?}")]
	Count { token: String, source: std::num::ParseIntError },
	#[error("expected {expected} cases, found {found}")]
	Missing { expected: usize, found: usize },
	#[error("{count} cases exceed the batch limit of {max}")]
	Limit { count: usize, max: usize },
	#[error("failed to write answers")]
	Io(#[from] std::io::Error),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Report {
	pub(crate) cases: usize,
	pub(crate) rejected: usize,
}


/// Encodes every case of `input` in parallel, writing one line per case in input order.
///
/// Input is raw bytes so that a stray non-UTF-8 byte only rejects its own case.
/// A rejected case leaves its line empty; only malformed batches fail as a whole.
pub(crate) fn run(input: &[u8], limits: Limits, mut out: impl Write) -> Result<Report, BatchError> {
	use {either::Either, rayon::prelude::*};

	let tokens = parsing::cases_from_bytes(input, limits.max_cases)?;
	tracing::info!(cases = tokens.len(), ?limits, "encoding batch");

	let outcomes = tokens.par_iter()
		.map(|token| Cipher::try_with_max_len(token, limits.max_len)
			.map(|cipher| encoder::encode(&cipher)))
		.collect::<Vec<Result<String, InputViolation>>>();

	let mut report = Report { cases: outcomes.len(), rejected: 0 };
	for (i, outcome) in outcomes.iter().enumerate() {
		if let Err(violation) = outcome {
			tracing::warn!(case = i + 1, token = %tokens[i].escape_ascii(), %violation, "rejected");
			report.rejected += 1;
		}
		let line = outcome.as_ref().map_or(Either::Right(""), Either::Left);
		writeln!(out, "{line}")?;
	}
	out.flush()?;
	tracing::debug!(?report, "batch done");
	Ok(report)
}


mod parsing {
	use super::BatchError;

	/// Splits off the leading case count and returns exactly that many tokens.
	pub(super) fn cases_from_bytes(s: &[u8], max_cases: usize) -> Result<Vec<&[u8]>, BatchError> {
		let mut tokens = s.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty());
		let count = String::from_utf8_lossy(tokens.next().ok_or(BatchError::Header)?);
		let count = count.parse::<usize>()
			.map_err(|e| BatchError::Count { token: count.clone().into_owned(), source: e })?;
		if count > max_cases { return Err(BatchError::Limit { count, max: max_cases }) }

		let cases = tokens.by_ref().take(count).collect::<Vec<_>>();
		if cases.len() < count { return Err(
			BatchError::Missing { expected: count, found: cases.len() }) }

		let trailing = tokens.count();
		if trailing > 0 { tracing::warn!(trailing, "ignoring tokens after last case") }
		Ok(cases)
	}
}
