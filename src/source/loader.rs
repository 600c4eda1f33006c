//! CSV loader for visit records

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::consts::{COL_COURSE, COL_INTERACTIONS, COL_PROGRAM, COL_TIME};
use crate::core::{Dataset, VisitRecord};
use crate::error::LoadError;
use crate::source::timestamp::parse_timestamp;
use crate::utils::Timezone;

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    time: usize,
    program: usize,
    course: usize,
    interactions: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or(LoadError::MissingColumn { column })
        };
        Ok(ColumnIndex {
            time: find(COL_TIME)?,
            program: find(COL_PROGRAM)?,
            course: find(COL_COURSE)?,
            interactions: find(COL_INTERACTIONS)?,
        })
    }
}

/// Load the visit dataset from `path`.
///
/// Any problem (missing file, malformed CSV, missing column, bad timestamp or
/// interaction count) fails the whole load; there is no partial dataset.
pub(crate) fn load_dataset(path: &Path, timezone: Timezone) -> Result<Dataset, LoadError> {
    let start = Instant::now();
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let dataset = read_records(file, timezone).map_err(|err| match err {
        ReadError::Csv(source) => LoadError::Csv {
            path: path.to_path_buf(),
            source,
        },
        ReadError::Load(e) => e,
    })?;

    info!(
        rows = dataset.len(),
        path = %path.display(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "loaded visit data"
    );
    Ok(dataset)
}

enum ReadError {
    Csv(csv::Error),
    Load(LoadError),
}

impl From<csv::Error> for ReadError {
    fn from(e: csv::Error) -> Self {
        ReadError::Csv(e)
    }
}

impl From<LoadError> for ReadError {
    fn from(e: LoadError) -> Self {
        ReadError::Load(e)
    }
}

fn read_records<R: Read>(input: R, timezone: Timezone) -> Result<Dataset, ReadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let columns = ColumnIndex::from_headers(reader.headers()?)?;
    debug!(?columns, "resolved CSV columns");

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        records.push(parse_row(&row, columns, i + 1, timezone)?);
    }
    Ok(Dataset::new(records))
}

fn parse_row(
    row: &StringRecord,
    columns: ColumnIndex,
    row_number: usize,
    timezone: Timezone,
) -> Result<VisitRecord, LoadError> {
    let cell = |idx: usize| row.get(idx).unwrap_or("");

    let raw_time = cell(columns.time);
    let time = parse_timestamp(raw_time, timezone).ok_or_else(|| LoadError::InvalidTimestamp {
        row: row_number,
        value: raw_time.to_string(),
    })?;

    // Blank cells load as missing; anything else must be a finite number
    let raw_interactions = cell(columns.interactions);
    let interactions = if raw_interactions.is_empty() {
        None
    } else {
        let value = raw_interactions
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LoadError::InvalidInteractions {
                row: row_number,
                value: raw_interactions.to_string(),
            })?;
        Some(value)
    };

    Ok(VisitRecord::new(
        time,
        cell(columns.program).to_string(),
        cell(columns.course).to_string(),
        interactions,
    ))
}
