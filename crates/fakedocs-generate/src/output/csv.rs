use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fakedocs_core::Record;

use crate::output::CountingWriter;

/// Write records as CSV with `fields` as the header and column order.
///
/// Fields a record lacks become empty cells.
pub fn write_records_csv<'a, W, I>(
    writer: W,
    fields: &[String],
    records: I,
) -> Result<u64, csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(fields)?;

    for record in records {
        let row: Vec<String> = fields
            .iter()
            .map(|field| {
                record
                    .get(field)
                    .map(|value| value.to_csv())
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

pub fn write_records_csv_file<'a, I>(
    path: &Path,
    fields: &[String],
    records: I,
) -> Result<u64, csv::Error>
where
    I: IntoIterator<Item = &'a Record>,
{
    let file = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    write_records_csv(file, fields, records)
}
