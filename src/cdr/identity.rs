//! Subscriber and device identifiers
//!
//! Phone numbers, IMEIs (with Luhn check digit) and record UUIDs. Every
//! value is drawn from the caller's random source so seeded runs repeat.

use crate::cdr::data::{MOBILE_PREFIXES, TYPE_ALLOCATION_CODES};
use crate::constants::cdr::PHONE_NUMBER_LEN;
use crate::error::Result;
use crate::rng::{choose, range, RandomSource};
use uuid::{Builder, Uuid};

/// A random UK mobile number
pub fn phone_number(rng: &dyn RandomSource) -> Result<String> {
    let prefix = choose(rng, MOBILE_PREFIXES)?;
    let mut number = format!("{}{}", prefix, range(rng, 100, 10_000_000_000)?);
    number.truncate(PHONE_NUMBER_LEN);
    Ok(number)
}

/// A random 15-digit IMEI: TAC, 6-digit serial number, Luhn check digit
pub fn imei(rng: &dyn RandomSource) -> Result<String> {
    let tac = choose(rng, TYPE_ALLOCATION_CODES)?;
    let serial = range(rng, 1, 999_999)?;
    let body = format!("{}{:06}", tac, serial);

    let digits: Vec<u32> = body.chars().filter_map(|c| c.to_digit(10)).collect();
    Ok(format!("{}{}", body, luhn_check_digit(&digits)))
}

/// Luhn checksum of a digit sequence (0 means the sequence is valid)
///
/// Counting from the rightmost digit, every second digit is doubled and
/// its digits summed.
pub fn luhn_checksum(digits: &[u32]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                doubled / 10 + doubled % 10
            } else {
                d
            }
        })
        .sum::<u32>()
        % 10
}

/// The digit that makes `digits` followed by it pass the Luhn check
pub fn luhn_check_digit(digits: &[u32]) -> u32 {
    let mut padded = digits.to_vec();
    padded.push(0);
    (10 - luhn_checksum(&padded)) % 10
}

/// A version 4 UUID built from random source bytes
pub fn record_id(rng: &dyn RandomSource) -> Result<Uuid> {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&rng.bytes(16)?);
    Ok(Builder::from_random_bytes(bytes).into_uuid())
}
