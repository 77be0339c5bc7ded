//! Brazilian tax id (CPF / CNPJ) checksums and the farm area invariant.

use crate::core::error::{AppError, Result};
use crate::shared::constants::INVALID_TOTAL_AREA_MESSAGE;

const CPF_LENGTH: usize = 11;
const CNPJ_LENGTH: usize = 14;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Sequence that passes the CPF checksum but is reserved as a placeholder
const CPF_PLACEHOLDER: &str = "12345678909";

/// Returns true if `value` is a valid CPF or a valid CNPJ.
///
/// Punctuation is ignored, so both `529.982.247-25` and `52998224725` are accepted.
pub fn is_valid_tax_id(value: &str) -> bool {
    is_valid_cpf(value) || is_valid_cnpj(value)
}

pub fn is_valid_cpf(value: &str) -> bool {
    let digits = strip_to_digits(value);
    if digits.len() != CPF_LENGTH || all_same(&digits) || digits == placeholder_digits() {
        return false;
    }

    digits[9..] == cpf_check_digits(&digits[..9])
}

pub fn is_valid_cnpj(value: &str) -> bool {
    let digits = strip_to_digits(value);
    if digits.len() != CNPJ_LENGTH || all_same(&digits) {
        return false;
    }

    digits[12..] == cnpj_check_digits(&digits[..12])
}

/// Computes the two CPF check digits for a 9-digit base
pub(crate) fn cpf_check_digits(base: &[u32]) -> [u32; 2] {
    let first = check_digit(base, (2..=10).rev());
    let second = check_digit(&[base, &[first][..]].concat(), (2..=11).rev());
    [first, second]
}

/// Computes the two CNPJ check digits for a 12-digit base
pub(crate) fn cnpj_check_digits(base: &[u32]) -> [u32; 2] {
    let first = check_digit(base, CNPJ_FIRST_WEIGHTS);
    let second = check_digit(&[base, &[first][..]].concat(), CNPJ_SECOND_WEIGHTS);
    [first, second]
}

/// Weighted sum modulo 11; remainders 0 and 1 map to 0
fn check_digit(digits: &[u32], weights: impl IntoIterator<Item = u32>) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        rest => 11 - rest,
    }
}

fn strip_to_digits(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn placeholder_digits() -> Vec<u32> {
    strip_to_digits(CPF_PLACEHOLDER)
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Agricultural plus vegetation area may not exceed the farm's total area
pub fn validate_area(total_area: f64, agricultural_area: f64, vegetation_area: f64) -> Result<()> {
    if agricultural_area + vegetation_area > total_area {
        return Err(AppError::Validation(INVALID_TOTAL_AREA_MESSAGE.to_string()));
    }
    Ok(())
}
