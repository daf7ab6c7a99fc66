use crate::host::ProgressJournal;
use crate::record::Record;

/// Pull-based bounded source with an open/iterate/close lifecycle.
///
/// `open` materializes a batch, `next_record` hands out one record per call
/// and `close` releases the batch. Reading past the end is not an error: the
/// source keeps answering `None` until it is closed and opened again.
pub trait RecordSource {
    /// Stable name used in logs and reports.
    fn name(&self) -> &str;

    /// Field names in the order records are built.
    fn field_names(&self) -> Vec<String>;

    fn open(&mut self, journal: &mut dyn ProgressJournal);

    fn has_more(&self) -> bool;

    fn next_record(&mut self) -> Option<&Record>;

    /// Releases the batch. Safe to call repeatedly or before `open`.
    fn close(&mut self);
}
