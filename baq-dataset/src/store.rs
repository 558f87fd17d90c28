use crate::compass::CompassDirection;
use crate::date_range::DateRange;
use crate::record::{PollutionRecord, WindRecord};
use crate::selection::Selection;
use baq_utils::dates;
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use log::info;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Role names used in load errors so a failure names which input was bad.
pub const POLLUTION_SOURCE: &str = "pollution";
pub const WIND_SOURCE: &str = "wind";

/// Errors raised while loading the two input datasets.
///
/// All of these are fatal at startup; there is no recovery path.
#[derive(Debug)]
pub enum DataLoadError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A required column header was not present in the source file.
    MissingColumn {
        source_name: &'static str,
        column: String,
    },
    /// A datetime cell could not be parsed in any accepted format.
    InvalidTimestamp {
        source_name: &'static str,
        value: String,
    },
    /// The primary dataset had no rows, so there is no span to select from.
    EmptyDataset,
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLoadError::Io(e) => write!(f, "failed to read dataset: {}", e),
            DataLoadError::Csv(e) => write!(f, "failed to parse dataset csv: {}", e),
            DataLoadError::MissingColumn { source_name, column } => {
                write!(f, "{} dataset is missing required column '{}'", source_name, column)
            }
            DataLoadError::InvalidTimestamp { source_name, value } => {
                write!(f, "{} dataset has unparseable datetime '{}'", source_name, value)
            }
            DataLoadError::EmptyDataset => write!(f, "pollution dataset contains no rows"),
        }
    }
}

impl std::error::Error for DataLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataLoadError::Io(e) => Some(e),
            DataLoadError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataLoadError {
    fn from(e: std::io::Error) -> Self {
        DataLoadError::Io(e)
    }
}

impl From<csv::Error> for DataLoadError {
    fn from(e: csv::Error) -> Self {
        DataLoadError::Csv(e)
    }
}

/// The two read-only record collections backing a dashboard session.
///
/// Loaded once at startup and never mutated afterwards. Both collections are
/// sorted by datetime at load time, so every filtered subset is already in
/// time-series order and charts never re-sort.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub pollution: Vec<PollutionRecord>,
    pub wind: Vec<WindRecord>,
}

impl Dataset {
    /// Load both datasets from CSV files on disk.
    pub fn load(
        pollution_path: impl AsRef<Path>,
        wind_path: impl AsRef<Path>,
    ) -> Result<Dataset, DataLoadError> {
        let pollution_csv = std::fs::read_to_string(pollution_path)?;
        let wind_csv = std::fs::read_to_string(wind_path)?;
        Dataset::from_csv(&pollution_csv, &wind_csv)
    }

    /// Build a dataset from in-memory CSV strings.
    pub fn from_csv(pollution_csv: &str, wind_csv: &str) -> Result<Dataset, DataLoadError> {
        let mut pollution = parse_pollution_csv(pollution_csv)?;
        let mut wind = parse_wind_csv(wind_csv)?;
        if pollution.is_empty() {
            return Err(DataLoadError::EmptyDataset);
        }
        pollution.sort_by_key(|r| r.datetime);
        wind.sort_by_key(|r| r.datetime);
        info!(
            "loaded {} pollution records and {} wind records",
            pollution.len(),
            wind.len()
        );
        Ok(Dataset { pollution, wind })
    }

    /// Distinct station names of the primary dataset, in first-seen order.
    pub fn stations(&self) -> Vec<String> {
        let mut stations: Vec<String> = Vec::new();
        for record in &self.pollution {
            if !stations.iter().any(|s| s == &record.station) {
                stations.push(record.station.clone());
            }
        }
        stations
    }

    /// The (min, max) datetime span of the primary dataset.
    ///
    /// The dataset is sorted and non-empty by construction.
    pub fn span(&self) -> (NaiveDateTime, NaiveDateTime) {
        let first = self.pollution.first().map(|r| r.datetime);
        let last = self.pollution.last().map(|r| r.datetime);
        (
            first.expect("dataset is non-empty by construction"),
            last.expect("dataset is non-empty by construction"),
        )
    }

    /// The default selection: the first station over the full dataset span.
    pub fn default_selection(&self) -> Selection {
        let (min, max) = self.span();
        let station = self
            .stations()
            .into_iter()
            .next()
            .expect("dataset is non-empty by construction");
        Selection::new(station, DateRange::new(min.date(), max.date()))
    }
}

/// Find a required column by header name.
fn column_index(
    headers: &StringRecord,
    source_name: &'static str,
    column: &str,
) -> Result<usize, DataLoadError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| DataLoadError::MissingColumn {
            source_name,
            column: column.to_string(),
        })
}

/// Parse a nullable numeric cell. Empty and NA cells load as `None`.
fn parse_value(cell: Option<&str>) -> Option<f64> {
    let s = cell?.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("na") || s.eq_ignore_ascii_case("nan") {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_pollution_csv(csv_object: &str) -> Result<Vec<PollutionRecord>, DataLoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes());

    let headers = rdr.headers()?.clone();
    let station_idx = column_index(&headers, POLLUTION_SOURCE, "station")?;
    let datetime_idx = column_index(&headers, POLLUTION_SOURCE, "datetime")?;
    let pm2_5_idx = column_index(&headers, POLLUTION_SOURCE, "PM2.5")?;
    let pm10_idx = column_index(&headers, POLLUTION_SOURCE, "PM10")?;
    let so2_idx = column_index(&headers, POLLUTION_SOURCE, "SO2")?;
    let no2_idx = column_index(&headers, POLLUTION_SOURCE, "NO2")?;
    let co_idx = column_index(&headers, POLLUTION_SOURCE, "CO")?;
    let o3_idx = column_index(&headers, POLLUTION_SOURCE, "O3")?;
    let temp_idx = column_index(&headers, POLLUTION_SOURCE, "TEMP")?;
    let wspm_idx = column_index(&headers, POLLUTION_SOURCE, "WSPM")?;
    let rain_idx = column_index(&headers, POLLUTION_SOURCE, "RAIN")?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let datetime_cell = row.get(datetime_idx).unwrap_or("");
        let datetime = dates::parse_datetime(datetime_cell).map_err(|_| {
            DataLoadError::InvalidTimestamp {
                source_name: POLLUTION_SOURCE,
                value: datetime_cell.to_string(),
            }
        })?;
        records.push(PollutionRecord {
            station: row.get(station_idx).unwrap_or("").trim().to_string(),
            datetime,
            pm2_5: parse_value(row.get(pm2_5_idx)),
            pm10: parse_value(row.get(pm10_idx)),
            so2: parse_value(row.get(so2_idx)),
            no2: parse_value(row.get(no2_idx)),
            co: parse_value(row.get(co_idx)),
            o3: parse_value(row.get(o3_idx)),
            temp: parse_value(row.get(temp_idx)),
            wspm: parse_value(row.get(wspm_idx)),
            rain: parse_value(row.get(rain_idx)),
        });
    }
    Ok(records)
}

fn parse_wind_csv(csv_object: &str) -> Result<Vec<WindRecord>, DataLoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes());

    let headers = rdr.headers()?.clone();
    let station_idx = column_index(&headers, WIND_SOURCE, "station")?;
    let datetime_idx = column_index(&headers, WIND_SOURCE, "datetime")?;
    let wd_idx = column_index(&headers, WIND_SOURCE, "wd")?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let datetime_cell = row.get(datetime_idx).unwrap_or("");
        // The wind source mixes bare dates and full timestamps; both are
        // normalized to NaiveDateTime so range comparisons are uniform.
        let datetime = dates::parse_timestamp_lenient(datetime_cell).map_err(|_| {
            DataLoadError::InvalidTimestamp {
                source_name: WIND_SOURCE,
                value: datetime_cell.to_string(),
            }
        })?;
        let wind_direction = row
            .get(wd_idx)
            .and_then(|s| CompassDirection::from_str(s).ok());
        records.push(WindRecord {
            station: row.get(station_idx).unwrap_or("").trim().to_string(),
            datetime,
            wind_direction,
        });
    }
    Ok(records)
}
