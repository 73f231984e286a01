// src/strip/header.rs

use csv::{ByteRecord, ReaderBuilder, Terminator, WriterBuilder};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, instrument};

use crate::error::StripError;

/// Copy every record of `source` except the first into a new file at `dest`.
///
/// A blank line is a record with no fields: it counts towards the header
/// position and is written back as an empty line. Field bytes are never
/// reinterpreted; the writer only re-applies quoting where a field needs it,
/// and terminates records with `\r\n`. Rows may differ in width. A source
/// with no records still produces an (empty) `dest`.
///
/// Returns the number of records written.
#[instrument(level = "info", skip(source, dest), fields(source = %source.display()))]
pub fn strip_header(source: &Path, dest: &Path) -> Result<u64, StripError> {
    let read_err = |source_err| StripError::Read {
        path: source.to_path_buf(),
        source: source_err,
    };
    let write_err = |source_err| StripError::Write {
        path: dest.to_path_buf(),
        source: source_err,
    };

    // read the source first so a missing input never leaves a stray output behind
    let data = fs::read(source).map_err(|e| read_err(csv::Error::from(e)))?;
    let file = File::create(dest).map_err(|e| write_err(csv::Error::from(e)))?;
    let mut out = BufWriter::new(file);

    let mut written = 0u64;
    for raw in split_records(&data).into_iter().skip(1) {
        if is_blank(raw) {
            // the csv writer renders a field-less record as `""`, so emit the bare terminator
            out.write_all(b"\r\n")
                .map_err(|e| write_err(csv::Error::from(e)))?;
            written += 1;
            continue;
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw);
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .terminator(Terminator::CRLF)
            .from_writer(&mut out);
        let mut record = ByteRecord::new();
        while reader.read_byte_record(&mut record).map_err(read_err)? {
            writer.write_byte_record(&record).map_err(write_err)?;
            written += 1;
        }
        writer
            .flush()
            .map_err(|e| write_err(csv::Error::from(e)))?;
    }
    out.flush().map_err(|e| write_err(csv::Error::from(e)))?;

    debug!(written, dest = %dest.display(), "header stripped");
    Ok(written)
}

/// Split raw CSV bytes into physical records, terminators included.
///
/// A newline inside a quoted field does not end a record. A quote only opens
/// a quoted field at the start of a field, and `""` inside one is an escape.
fn split_records(data: &[u8]) -> Vec<&[u8]> {
    let mut records = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut i = 0;

    while i < data.len() {
        let b = data[i];
        if in_quotes {
            if b == b'"' {
                if data.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            }
        } else {
            match b {
                b'"' if at_field_start => {
                    in_quotes = true;
                    at_field_start = false;
                }
                b',' => at_field_start = true,
                b'\n' => {
                    records.push(&data[start..=i]);
                    start = i + 1;
                    at_field_start = true;
                }
                b'\r' => {}
                _ => at_field_start = false,
            }
        }
        i += 1;
    }
    if start < data.len() {
        records.push(&data[start..]);
    }
    records
}

fn is_blank(raw: &[u8]) -> bool {
    raw.iter().all(|&b| b == b'\r' || b == b'\n')
}
