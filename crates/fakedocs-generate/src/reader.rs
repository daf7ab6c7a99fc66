//! The fake document reader: a pull-based bounded record source.

use std::iter::FusedIterator;
use std::sync::Arc;
use std::time::Instant;

use fakedocs_core::{ConfigLookup, ProgressJournal, Record, RecordSource};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::generators::inference::{FieldKind, InferenceEngine, classify};
use crate::model::ReaderOptions;
use crate::pools::ReferencePools;
use crate::variant::Variant;

/// Upper bound on the batch preallocation; larger batches grow on demand.
const MAX_PREALLOCATED_RECORDS: usize = 4096;

/// Generates a batch of synthetic records per open/close cycle.
///
/// Pools and the record count are fixed at construction. Each `open`
/// regenerates the whole batch with fresh randomness; `close` returns the
/// reader to its pre-open state.
#[derive(Debug)]
pub struct DocumentReader {
    options: ReaderOptions,
    pools: Arc<ReferencePools>,
    extra: Option<ExtraField>,
    batch: Option<Vec<Record>>,
    cursor: usize,
    open_cycles: u64,
    emitted: u64,
}

#[derive(Debug)]
struct ExtraField {
    name: String,
    kind: FieldKind,
    engine: InferenceEngine,
}

impl DocumentReader {
    pub fn new(options: ReaderOptions, pools: Arc<ReferencePools>) -> Self {
        let extra = options
            .required_field
            .as_deref()
            .filter(|_| options.variant.accepts_extra_field())
            .filter(|name| !name.is_empty() && !options.variant.is_standard_field(name))
            .map(|name| ExtraField {
                name: name.to_string(),
                kind: classify(name),
                engine: InferenceEngine::new(Arc::clone(&pools)),
            });

        if let Some(extra) = &extra {
            info!(field = %extra.name, kind = %extra.kind, "extra field enabled");
        }

        Self {
            options,
            pools,
            extra,
            batch: None,
            cursor: 0,
            open_cycles: 0,
            emitted: 0,
        }
    }

    /// Resolves options from the host and uses the variant's built-in pools.
    pub fn from_config(variant: Variant, config: &dyn ConfigLookup) -> Self {
        let options = ReaderOptions::from_config(variant, config);
        Self::new(options, Arc::new(variant.default_pools()))
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    pub fn pools(&self) -> &ReferencePools {
        &self.pools
    }

    /// Name and inferred kind of the extra field, when one is attached.
    pub fn extra_field(&self) -> Option<(&str, FieldKind)> {
        self.extra
            .as_ref()
            .map(|extra| (extra.name.as_str(), extra.kind))
    }

    pub fn is_open(&self) -> bool {
        self.batch.is_some()
    }

    /// Size of the current batch; zero while closed.
    pub fn len(&self) -> usize {
        self.current_batch().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current_batch().is_empty()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn open_cycles(&self) -> u64 {
        self.open_cycles
    }

    /// Total records handed out across every cycle.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Materializes the batch, notifying `journal` after every record.
    pub fn open(&mut self, journal: &mut dyn ProgressJournal) {
        let started = Instant::now();
        let count = self.options.count;
        let mut rng = self.cycle_rng();
        self.open_cycles += 1;

        let mut batch = Vec::with_capacity(count.min(MAX_PREALLOCATED_RECORDS));
        self.cursor = 0;

        for index in 0..count {
            let mut record = self
                .options
                .variant
                .build_record(index, &self.pools, &mut rng);
            if let Some(extra) = &self.extra {
                let value = extra.engine.generate(extra.kind, &extra.name, &mut rng);
                record.insert(extra.name.clone(), value);
            }
            batch.push(record);
            journal.on_progress(index as u64 + 1);
        }
        self.batch = Some(batch);

        info!(
            variant = %self.options.variant,
            records = count,
            cycle = self.open_cycles,
            duration_ms = started.elapsed().as_millis() as u64,
            "reader opened"
        );
    }

    /// Lazily walks the remaining records of the current batch.
    ///
    /// The cursor lives in the reader, so a second call resumes where the
    /// first iterator stopped. Only a close/open cycle starts over.
    pub fn records(&mut self) -> Records<'_> {
        Records {
            batch: self.batch.as_deref().unwrap_or_default(),
            cursor: &mut self.cursor,
            emitted: &mut self.emitted,
        }
    }

    pub fn has_more(&self) -> bool {
        self.cursor < self.current_batch().len()
    }

    pub fn next_record(&mut self) -> Option<&Record> {
        let record = self.batch.as_deref()?.get(self.cursor)?;
        self.cursor += 1;
        self.emitted += 1;
        Some(record)
    }

    /// Drops the batch and rewinds the cursor. Idempotent.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!(
                variant = %self.options.variant,
                consumed = self.cursor,
                records = self.len(),
                "reader closed"
            );
        }
        self.batch = None;
        self.cursor = 0;
    }

    /// Field names in build order, extra field last.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .options
            .variant
            .standard_fields()
            .iter()
            .map(|name| name.to_string())
            .collect();
        if let Some(extra) = &self.extra {
            names.push(extra.name.clone());
        }
        names
    }

    fn current_batch(&self) -> &[Record] {
        self.batch.as_deref().unwrap_or_default()
    }

    fn cycle_rng(&self) -> ChaCha8Rng {
        match self.options.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(cycle_seed(seed, self.open_cycles)),
            None => ChaCha8Rng::seed_from_u64(rand::rng().random()),
        }
    }
}

impl RecordSource for DocumentReader {
    fn name(&self) -> &str {
        self.options.variant.as_str()
    }

    fn field_names(&self) -> Vec<String> {
        DocumentReader::field_names(self)
    }

    fn open(&mut self, journal: &mut dyn ProgressJournal) {
        DocumentReader::open(self, journal)
    }

    fn has_more(&self) -> bool {
        DocumentReader::has_more(self)
    }

    fn next_record(&mut self) -> Option<&Record> {
        DocumentReader::next_record(self)
    }

    fn close(&mut self) {
        DocumentReader::close(self)
    }
}

/// Forward-only iterator over a reader's current batch.
#[derive(Debug)]
pub struct Records<'a> {
    batch: &'a [Record],
    cursor: &'a mut usize,
    emitted: &'a mut u64,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.batch.get(*self.cursor)?;
        *self.cursor += 1;
        *self.emitted += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.batch.len().saturating_sub(*self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Records<'_> {}

impl FusedIterator for Records<'_> {}

fn cycle_seed(seed: u64, cycle: u64) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    hash ^= cycle.wrapping_mul(0x9e3779b97f4a7c15);
    hash.wrapping_mul(0x100000001b3)
}

#[cfg(test)]
mod tests {
    use fakedocs_core::NoopJournal;

    use super::*;

    #[test]
    fn cycle_seeds_differ_per_cycle() {
        assert_ne!(cycle_seed(42, 0), cycle_seed(42, 1));
        assert_eq!(cycle_seed(42, 3), cycle_seed(42, 3));
    }

    #[test]
    fn extra_field_ignored_outside_extensible_variant() {
        let mut options = ReaderOptions::new(Variant::Catalog);
        options.required_field = Some("userScore".to_string());
        let reader = DocumentReader::new(options, Arc::new(ReferencePools::catalog()));
        assert!(reader.extra_field().is_none());
        assert_eq!(reader.field_names().len(), 13);
    }

    struct StopAfter(u64);

    impl ProgressJournal for StopAfter {
        fn on_progress(&mut self, produced: u64) {
            if produced == self.0 {
                std::panic::panic_any(StopAfter(produced));
            }
        }
    }

    #[test]
    fn huge_counts_do_not_preallocate_the_whole_batch() {
        let mut options = ReaderOptions::new(Variant::Catalog);
        options.count = usize::MAX;
        let mut reader = DocumentReader::new(options, Arc::new(ReferencePools::catalog()));

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            reader.open(&mut StopAfter(3));
        }));
        let payload = outcome.expect_err("journal stops the run");
        let stop = payload
            .downcast_ref::<StopAfter>()
            .expect("generation reached the journal");
        assert_eq!(stop.0, 3);
    }

    #[test]
    fn counts_above_the_preallocation_cap_are_generated_in_full() {
        let mut options = ReaderOptions::new(Variant::Catalog);
        options.count = MAX_PREALLOCATED_RECORDS + 10;
        let mut reader = DocumentReader::new(options, Arc::new(ReferencePools::catalog()));
        reader.open(&mut NoopJournal);
        assert_eq!(reader.len(), MAX_PREALLOCATED_RECORDS + 10);
        assert_eq!(reader.records().count(), MAX_PREALLOCATED_RECORDS + 10);
    }
}
