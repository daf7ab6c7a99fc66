use std::time::Duration;

use fakedocs_core::ConfigLookup;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::generators::inference::FieldKind;
use crate::variant::{REQUIRED_FIELD_KEY, SEED_KEY, Variant};

/// Resolved reader configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderOptions {
    pub variant: Variant,
    /// Number of records materialized per open.
    pub count: usize,
    /// Caller-named extra field; only honored by the extensible variant.
    pub required_field: Option<String>,
    /// Base seed; when absent every open draws fresh entropy.
    pub seed: Option<u64>,
}

impl ReaderOptions {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            count: variant.default_count(),
            required_field: None,
            seed: None,
        }
    }

    /// Resolves options through a host lookup.
    ///
    /// Counts are read from their leading digits, so `"4.5"` is 4 and
    /// `"12abc"` is 12. Values with no leading digits fall back to the
    /// variant default. Invalid seeds are ignored.
    pub fn from_config(variant: Variant, config: &dyn ConfigLookup) -> Self {
        let default_count = variant.default_count();
        let raw_count = config.get_or(variant.count_key(), &default_count.to_string());
        let count = parse_count(&raw_count).unwrap_or_else(|| {
            warn!(
                key = variant.count_key(),
                value = %raw_count,
                fallback = default_count,
                "invalid record count, using default"
            );
            default_count
        });

        let required_field = if variant.accepts_extra_field() {
            Some(config.get_or(REQUIRED_FIELD_KEY, ""))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        } else {
            None
        };

        let seed = config
            .get(SEED_KEY)
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!(value = %raw, "invalid seed, ignoring");
                    None
                }
            });

        Self {
            variant,
            count,
            required_field,
            seed,
        }
    }
}

/// Parses the leading decimal digits of a configured record count.
///
/// An optional `+` sign is accepted. Returns `None` when no digit follows,
/// for negative values, and when the digits overflow `usize`.
pub fn parse_count(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse::<usize>().ok()
}

/// Summary of one reader run, written next to the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub variant: Variant,
    pub records_requested: u64,
    pub records_generated: u64,
    pub records_emitted: u64,
    pub open_cycles: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_field_kind: Option<FieldKind>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, options: &ReaderOptions) -> Self {
        Self {
            run_id,
            variant: options.variant,
            records_requested: options.count as u64,
            records_generated: 0,
            records_emitted: 0,
            open_cycles: 0,
            extra_field: None,
            extra_field_kind: None,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_extra_field(&mut self, name: &str, kind: FieldKind) {
        self.extra_field = Some(name.to_string());
        self.extra_field_kind = Some(kind);
    }

    pub fn finish(&mut self, elapsed: Duration) {
        self.duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    }
}
