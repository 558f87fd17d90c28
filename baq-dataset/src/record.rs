use crate::compass::CompassDirection;
use crate::field::{Pollutant, WeatherField};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::cmp::Ordering;

/// Access to the station key and timestamp shared by both record types.
///
/// The filter engine is generic over this trait so one predicate serves the
/// pollution and wind datasets.
pub trait StationSeries {
    fn station(&self) -> &str;
    fn datetime(&self) -> NaiveDateTime;
}

/// One hourly row of the primary pollution/weather dataset.
///
/// Pollutant and weather readings are nullable: a `None` is a gap in the
/// source data and must stay a gap through charting, never a zero.
#[derive(Debug, Clone, Serialize)]
pub struct PollutionRecord {
    pub station: String,
    pub datetime: NaiveDateTime,
    #[serde(rename = "PM2.5")]
    pub pm2_5: Option<f64>,
    #[serde(rename = "PM10")]
    pub pm10: Option<f64>,
    #[serde(rename = "SO2")]
    pub so2: Option<f64>,
    #[serde(rename = "NO2")]
    pub no2: Option<f64>,
    #[serde(rename = "CO")]
    pub co: Option<f64>,
    #[serde(rename = "O3")]
    pub o3: Option<f64>,
    #[serde(rename = "TEMP")]
    pub temp: Option<f64>,
    #[serde(rename = "WSPM")]
    pub wspm: Option<f64>,
    #[serde(rename = "RAIN")]
    pub rain: Option<f64>,
}

impl PollutionRecord {
    /// The reading for one pollutant column.
    pub fn pollutant(&self, pollutant: Pollutant) -> Option<f64> {
        match pollutant {
            Pollutant::Pm25 => self.pm2_5,
            Pollutant::Pm10 => self.pm10,
            Pollutant::So2 => self.so2,
            Pollutant::No2 => self.no2,
            Pollutant::Co => self.co,
            Pollutant::O3 => self.o3,
        }
    }

    /// The reading for one weather column.
    pub fn weather(&self, field: WeatherField) -> Option<f64> {
        match field {
            WeatherField::Temp => self.temp,
            WeatherField::Wspm => self.wspm,
            WeatherField::Rain => self.rain,
        }
    }
}

impl StationSeries for PollutionRecord {
    fn station(&self) -> &str {
        &self.station
    }

    fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }
}

impl PartialEq for PollutionRecord {
    fn eq(&self, other: &Self) -> bool {
        self.datetime == other.datetime && self.station == other.station
    }
}

impl Eq for PollutionRecord {}

impl Ord for PollutionRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.datetime.cmp(&other.datetime)
    }
}

impl PartialOrd for PollutionRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One row of the secondary wind-direction dataset.
#[derive(Debug, Clone, Serialize)]
pub struct WindRecord {
    pub station: String,
    pub datetime: NaiveDateTime,
    /// Compass-rose direction, or `None` where the source row had no reading.
    #[serde(rename = "wd")]
    pub wind_direction: Option<CompassDirection>,
}

impl StationSeries for WindRecord {
    fn station(&self) -> &str {
        &self.station
    }

    fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(station: &str, hour: u32) -> PollutionRecord {
        PollutionRecord {
            station: station.to_string(),
            datetime: NaiveDate::from_ymd_opt(2013, 3, 1)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            pm2_5: Some(10.0),
            pm10: None,
            so2: None,
            no2: None,
            co: None,
            o3: None,
            temp: Some(5.0),
            wspm: None,
            rain: None,
        }
    }

    #[test]
    fn test_pollutant_accessor() {
        let r = record("Aotizhongxin", 0);
        assert_eq!(r.pollutant(Pollutant::Pm25), Some(10.0));
        assert_eq!(r.pollutant(Pollutant::Pm10), None);
    }

    #[test]
    fn test_weather_accessor() {
        let r = record("Aotizhongxin", 0);
        assert_eq!(r.weather(WeatherField::Temp), Some(5.0));
        assert_eq!(r.weather(WeatherField::Rain), None);
    }

    #[test]
    fn test_records_order_by_datetime() {
        let mut records = vec![record("Dongsi", 5), record("Aotizhongxin", 1)];
        records.sort();
        assert_eq!(records[0].station, "Aotizhongxin");
    }
}
