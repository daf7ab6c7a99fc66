use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fakedocs_core::Record;

use crate::errors::GenerationError;
use crate::output::CountingWriter;

/// Write one JSON object per line.
pub fn write_records_ndjson<'a, W, I>(writer: W, records: I) -> Result<u64, GenerationError>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let mut writer = CountingWriter::new(writer);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(writer.bytes_written())
}

pub fn write_records_ndjson_file<'a, I>(path: &Path, records: I) -> Result<u64, GenerationError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let file = BufWriter::new(File::create(path)?);
    write_records_ndjson(file, records)
}
