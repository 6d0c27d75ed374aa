// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{assignment::Assignment, big_value::BigValue, cipher::Cipher, evaluator};


/// Minimal value of `cipher` over all digit maps and bases.
pub(crate) fn minimize(cipher: &Cipher) -> BigValue {
	let Assignment { digits, base } = Assignment::minimal(cipher);
	tracing::debug!(%cipher, base, ?digits, "assigned");
	evaluator::evaluate(cipher, &digits, base)
}

pub(crate) fn encode(cipher: &Cipher) -> String {
	minimize(cipher).to_decimal_string()
}
