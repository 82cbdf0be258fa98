//! Zip payload decoding.
//!
//! This module is responsible for turning the downloaded archive into raw,
//! tokenized records. It does no semantic validation: the header line is
//! dropped without checking its column names, short rows keep whatever prefix
//! of fields they have, and deciding whether a row is usable is left to the
//! normalizer.

use std::io::{Cursor, Read};

use csv::ReaderBuilder;
use zip::ZipArchive;

use crate::domain::RawRecord;
use crate::error::AppError;

/// Decode the downloaded bundle into raw records.
///
/// The bundle is a zip archive containing one pipe-delimited text member;
/// only the first member by archive order is read (additional members are
/// ignored). The text is treated as latin-1, so decoding accepts any byte
/// value and cannot fail.
pub fn parse_archive(bundle: &[u8]) -> Result<Vec<RawRecord>, AppError> {
    let mut archive = ZipArchive::new(Cursor::new(bundle))
        .map_err(|e| AppError::new(4, format!("Failed to open fails archive: {e}")))?;

    if archive.is_empty() {
        return Err(AppError::new(4, "Fails archive contains no members."));
    }

    let mut member = archive
        .by_index(0)
        .map_err(|e| AppError::new(4, format!("Failed to read archive member: {e}")))?;
    let mut raw = Vec::new();
    member
        .read_to_end(&mut raw)
        .map_err(|e| AppError::new(4, format!("Failed to read archive member: {e}")))?;

    Ok(parse_delimited(&decode_latin1(&raw)))
}

/// Latin-1 decode: every byte maps to the Unicode scalar of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Tokenize pipe-delimited text into raw records, dropping the header line.
fn parse_delimited(text: &str) -> Vec<RawRecord> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'|')
        // First line is a header; discarded, not validated.
        .has_headers(true)
        // Rows may be shorter or longer than the nominal six columns.
        .flexible(true)
        // The published file is plain pipe-delimited; quotes are literal.
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        // A malformed line is a row-level anomaly, not an error.
        let Ok(record) = result else { continue };
        if record.is_empty() {
            continue;
        }

        let field = |idx: usize| record.get(idx).map(str::to_string);
        rows.push(RawRecord {
            settlement_date: field(0),
            cusip: field(1),
            symbol: field(2),
            quantity_fails: field(3),
            company: field(4),
            price: field(5),
            extras: record.iter().skip(6).map(str::to_string).collect(),
        });
    }

    rows
}
