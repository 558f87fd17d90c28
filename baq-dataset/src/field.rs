use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six pollutant concentrations reported by the monitoring stations.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    Pm25,
    Pm10,
    So2,
    No2,
    Co,
    O3,
}

impl Pollutant {
    /// All pollutants in dataset column order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    /// The dataset column header for this pollutant.
    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::So2 => "SO2",
            Pollutant::No2 => "NO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Pollutant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// The three weather variables summarized as averages on the dashboard.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum WeatherField {
    /// Air temperature in degrees Celsius
    Temp,
    /// Wind speed in meters per second
    Wspm,
    /// Precipitation in millimeters
    Rain,
}

impl WeatherField {
    /// All weather fields in dataset column order.
    pub const ALL: [WeatherField; 3] = [WeatherField::Temp, WeatherField::Wspm, WeatherField::Rain];

    /// The dataset column header for this weather variable.
    pub fn label(&self) -> &'static str {
        match self {
            WeatherField::Temp => "TEMP",
            WeatherField::Wspm => "WSPM",
            WeatherField::Rain => "RAIN",
        }
    }
}

impl fmt::Display for WeatherField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
