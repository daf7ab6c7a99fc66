use chrono::NaiveDate;
use rand::Rng;

use crate::pools::ReferencePools;

pub const AGE_RANGE: (i64, i64) = (18, 75);
pub const QUANTITY_RANGE: (i64, i64) = (1, 100);
pub const SCORE_RANGE: (i64, i64) = (0, 100);
/// Price bounds in cents.
pub const PRICE_CENTS_RANGE: (i64, i64) = (100, 10_000);
pub const CREATED_YEAR: i32 = 2024;
pub const ID_WIDTH: usize = 5;
pub const SUFFIX_LEN: usize = 6;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn random_int<R: Rng + ?Sized>(rng: &mut R, (min, max): (i64, i64)) -> i64 {
    rng.random_range(min..=max)
}

/// Uniform price rounded to two decimals.
pub fn random_price<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let (min, max) = PRICE_CENTS_RANGE;
    let cents = rng.random_range(min as f64..=max as f64).round();
    cents / 100.0
}

/// Date in the fixed year; days stop at 28 so every month is valid.
pub fn random_date<R: Rng + ?Sized>(rng: &mut R) -> String {
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=28);
    format_date(CREATED_YEAR, month, day)
}

pub fn format_date(year: i32, month: u32, day: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("{year:04}-{month:02}-{day:02}"))
}

/// Lowercase base-36 string of `len` characters.
pub fn random_suffix<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..BASE36.len());
            char::from(BASE36.get(idx).copied().unwrap_or(b'0'))
        })
        .collect()
}

/// `doc-<1-based index padded to width>-<suffix>`.
///
/// The index prefix keeps identifiers unique within a batch even when
/// suffixes collide.
pub fn document_id<R: Rng + ?Sized>(rng: &mut R, index: usize) -> String {
    let suffix = random_suffix(rng, SUFFIX_LEN);
    format!("doc-{:0width$}-{suffix}", index + 1, width = ID_WIDTH)
}

pub fn email_for(first_name: &str, last_name: &str) -> String {
    format!(
        "{}.{}@example.com",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}

/// Address built from names sampled independently of any record.
pub fn random_email<R: Rng + ?Sized>(rng: &mut R, pools: &ReferencePools) -> String {
    let first = pools.first_names.pick(rng);
    let last = pools.last_names.pick(rng);
    email_for(first, last)
}

pub fn random_full_name<R: Rng + ?Sized>(rng: &mut R, pools: &ReferencePools) -> String {
    let first = pools.first_names.pick(rng);
    let last = pools.last_names.pick(rng);
    format!("{first} {last}")
}

/// Random UUID v4 string drawn from `rng`.
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    uuid::Uuid::from_bytes(bytes).to_string()
}
