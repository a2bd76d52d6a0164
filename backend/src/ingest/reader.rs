//! Header-driven CSV row reading.

use csv::{ByteRecord, ReaderBuilder};

use crate::models::Month;

const UTF8_BOM: char = '\u{feff}';

/// One data row: the free-text metric name and the raw month cells.
///
/// Cells for month columns the file does not have (or that a short row does
/// not reach) are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub metric: String,
    pub cells: [String; 12],
}

impl RawRow {
    pub fn cell(&self, month: Month) -> &str {
        &self.cells[month.index()]
    }
}

/// Column positions resolved from the header row.
#[derive(Debug, Default)]
struct HeaderIndex {
    metric: Option<usize>,
    months: [Option<usize>; 12],
}

impl HeaderIndex {
    fn from_record(headers: &ByteRecord) -> Self {
        let mut index = HeaderIndex::default();
        for (position, raw) in headers.iter().enumerate() {
            let name = String::from_utf8_lossy(raw);
            let name = name.trim_start_matches(UTF8_BOM).trim();
            if name.eq_ignore_ascii_case("metric") {
                index.metric.get_or_insert(position);
                continue;
            }
            if let Some(month) = Month::ALL
                .iter()
                .find(|m| m.label().eq_ignore_ascii_case(name))
            {
                index.months[month.index()].get_or_insert(position);
            }
        }
        index
    }

    fn field(record: &ByteRecord, position: Option<usize>) -> String {
        position
            .and_then(|p| record.get(p))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }

    fn row(&self, record: &ByteRecord) -> RawRow {
        RawRow {
            metric: Self::field(record, self.metric),
            cells: std::array::from_fn(|i| Self::field(record, self.months[i])),
        }
    }
}

/// Read every data row of a CSV document with a header row.
///
/// Rows may be ragged and cells need not be valid UTF-8 (invalid sequences
/// are replaced). Records the reader cannot decode are skipped, so this never
/// fails; a file without a `Metric` column yields rows with empty names.
pub fn read_rows(bytes: &[u8]) -> Vec<RawRow> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let index = match reader.byte_headers() {
        Ok(headers) => HeaderIndex::from_record(headers),
        Err(e) => {
            log::debug!("CSV header unreadable: {}", e);
            return Vec::new();
        }
    };
    if index.metric.is_none() {
        log::debug!("CSV has no Metric column");
    }

    let mut rows = Vec::new();
    for result in reader.byte_records() {
        match result {
            Ok(record) => rows.push(index.row(&record)),
            Err(e) => log::debug!("Skipping undecodable CSV record: {}", e),
        }
    }
    rows
}
