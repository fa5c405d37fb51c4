//! CSV sources for the three charts.
//!
//! Columns are looked up by header name and extra columns are ignored.
//! Numeric cells are validated while loading, so a bad cell is reported with
//! its line and column instead of surfacing later as broken geometry.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use csv::StringRecord;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DataLoadError {
    #[display("failed to open {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[display("malformed CSV in {}", path.display())]
    Malformed { path: PathBuf, source: csv::Error },
    #[display("{} has no `{column}` column", path.display())]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },
    #[display("{}:{line}: `{column}` is not a finite number: {value:?}", path.display())]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// A row type read from a CSV source.
pub trait CsvRecord: Sized {
    /// Header names this record reads, in the order `from_row` indexes them.
    const COLUMNS: &'static [&'static str];

    fn from_row(row: &Row<'_>) -> Result<Self, DataLoadError>;
}

/// One CSV record viewed through the columns of a [`CsvRecord`].
#[derive(Debug)]
pub struct Row<'a> {
    path: &'a Path,
    line: u64,
    record: &'a StringRecord,
    columns: &'a [&'static str],
    indices: &'a [usize],
}

impl Row<'_> {
    fn cell(&self, column: usize) -> &str {
        self.record.get(self.indices[column]).unwrap_or_default().trim()
    }

    pub fn text(&self, column: usize) -> String {
        self.cell(column).to_owned()
    }

    pub fn number(&self, column: usize) -> Result<f64, DataLoadError> {
        let text = self.cell(column);
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| DataLoadError::InvalidNumber {
                path: self.path.to_owned(),
                line: self.line,
                column: self.columns[column],
                value: text.to_owned(),
            })
    }
}

/// Boxplot source: one post per row.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeGroupLikes {
    pub age_group: String,
    pub likes: f64,
}

impl CsvRecord for AgeGroupLikes {
    const COLUMNS: &'static [&'static str] = &["AgeGroup", "Likes"];

    fn from_row(row: &Row<'_>) -> Result<Self, DataLoadError> {
        Ok(Self {
            age_group: row.text(0),
            likes: row.number(1)?,
        })
    }
}

/// Grouped bar source: average likes per platform and post type.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformPostLikes {
    pub platform: String,
    pub post_type: String,
    pub avg_likes: f64,
}

impl CsvRecord for PlatformPostLikes {
    const COLUMNS: &'static [&'static str] = &["Platform", "PostType", "AvgLikes"];

    fn from_row(row: &Row<'_>) -> Result<Self, DataLoadError> {
        Ok(Self {
            platform: row.text(0),
            post_type: row.text(1),
            avg_likes: row.number(2)?,
        })
    }
}

/// Line source: average likes per day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLikes {
    pub date: String,
    pub avg_likes: f64,
}

impl CsvRecord for DailyLikes {
    const COLUMNS: &'static [&'static str] = &["Date", "AvgLikes"];

    fn from_row(row: &Row<'_>) -> Result<Self, DataLoadError> {
        Ok(Self {
            date: row.text(0),
            avg_likes: row.number(1)?,
        })
    }
}

pub fn load_records<T>(path: &Path) -> Result<Vec<T>, DataLoadError>
where
    T: CsvRecord,
{
    let file = File::open(path).map_err(|source| DataLoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    read_records(path, BufReader::new(file))
}

/// Reads records from `reader`; `path` is only used in error reports.
pub fn read_records<T, R>(path: &Path, reader: R) -> Result<Vec<T>, DataLoadError>
where
    T: CsvRecord,
    R: io::Read,
{
    let malformed = |source| DataLoadError::Malformed {
        path: path.to_owned(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = reader.headers().map_err(malformed)?.clone();
    let indices = T::COLUMNS
        .iter()
        .map(|&column| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| DataLoadError::MissingColumn {
                    path: path.to_owned(),
                    column,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = vec![];
    for result in reader.records() {
        let record = result.map_err(malformed)?;
        let row = Row {
            path,
            line: record.position().map_or(0, csv::Position::line),
            record: &record,
            columns: T::COLUMNS,
            indices: &indices,
        };
        records.push(T::from_row(&row)?);
    }
    Ok(records)
}
