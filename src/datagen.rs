//! Synthetic test-data generation from the fixed word corpora.
//!
//! The only component that consumes randomness. Generation is infallible: a
//! valid [`DataKind`] always yields a value, and invalid kind tags are
//! rejected at parse time instead of producing an empty result downstream.

use std::fmt;

use chrono::{Days, Utc};
use rand::Rng;

use crate::corpus;

/// Number of days (exclusive upper bound) a synthetic date may lie in the
/// future.
const DATE_OFFSET_DAYS: u64 = 365;

/// Kind of synthetic value to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Full name, `<first> <last>`.
    Name,
    /// Email address, `<first>.<last>@<domain>`.
    Email,
    /// US phone number, `+1 (NNN) NNN-NNNN`.
    Phone,
    /// Postal address, `<number> <street>, <city>, USA`.
    Address,
    /// Calendar date within the next year, `YYYY-MM-DD`.
    Date,
}

impl DataKind {
    /// Every kind, in presentation order.
    pub const ALL: [DataKind; 5] = [
        DataKind::Name,
        DataKind::Email,
        DataKind::Phone,
        DataKind::Address,
        DataKind::Date,
    ];

    /// Parse a lowercase kind tag. Unrecognized tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "name" => Some(DataKind::Name),
            "email" => Some(DataKind::Email),
            "phone" => Some(DataKind::Phone),
            "address" => Some(DataKind::Address),
            "date" => Some(DataKind::Date),
            _ => None,
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            DataKind::Name => "name",
            DataKind::Email => "email",
            DataKind::Phone => "phone",
            DataKind::Address => "address",
            DataKind::Date => "date",
        };
        f.write_str(tag)
    }
}

/// Generate one synthetic value of `kind` using the thread-local RNG.
pub fn generate(kind: DataKind) -> String {
    generate_with(kind, &mut rand::thread_rng())
}

/// Generate one synthetic value of `kind` from the supplied RNG.
///
/// Seedable entry point for deterministic tests.
pub fn generate_with<R: Rng + ?Sized>(kind: DataKind, rng: &mut R) -> String {
    match kind {
        DataKind::Name => format!(
            "{} {}",
            pick(rng, &corpus::FIRST_NAMES),
            pick(rng, &corpus::LAST_NAMES)
        ),
        DataKind::Email => {
            let first = pick(rng, &corpus::FIRST_NAMES).to_lowercase();
            let last = pick(rng, &corpus::LAST_NAMES).to_lowercase();
            let domain = pick(rng, &corpus::EMAIL_DOMAINS);
            format!("{first}.{last}@{domain}")
        }
        DataKind::Phone => format!(
            "+1 ({}) {}-{}",
            rng.gen_range(100..1000_u32),
            rng.gen_range(100..1000_u32),
            rng.gen_range(1000..10000_u32)
        ),
        DataKind::Address => format!(
            "{} {}, {}, USA",
            rng.gen_range(100..10000_u32),
            pick(rng, &corpus::STREETS),
            pick(rng, &corpus::CITIES)
        ),
        DataKind::Date => {
            let today = Utc::now().date_naive();
            let offset = rng.gen_range(0..DATE_OFFSET_DAYS);
            let date = today.checked_add_days(Days::new(offset)).unwrap_or(today);
            date.format("%Y-%m-%d").to_string()
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, corpus: &[&'a str]) -> &'a str {
    corpus[rng.gen_range(0..corpus.len())]
}
