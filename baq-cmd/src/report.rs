//! Dashboard report assembly: one selection in, every chart input out.
//!
//! `DashboardReport` bundles what the original dashboard page renders for a
//! single station/date-range choice: six pollutant time series, three
//! weather means, the wind-direction counts, and the raw filtered records.

use anyhow::{bail, Context};
use baq_data::aggregate;
use baq_data::filter::filter;
use baq_dataset::date_range::DateRange;
use baq_dataset::field::{Pollutant, WeatherField};
use baq_dataset::record::PollutionRecord;
use baq_dataset::selection::Selection;
use baq_dataset::store::Dataset;
use baq_utils::dates;
use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use serde::Serialize;

/// One charted point: a timestamp and a nullable reading.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesPoint {
    pub datetime: NaiveDateTime,
    /// `None` is a gap in the source data and renders as a gap.
    pub value: Option<f64>,
}

/// The ordered time series for one pollutant.
#[derive(Debug, Serialize)]
pub struct PollutantSeries {
    pub pollutant: String,
    pub points: Vec<SeriesPoint>,
}

/// Average weather conditions over the selected range.
///
/// A `None` mean is the NaN degenerate case (empty or all-null subset),
/// serialized as JSON null.
#[derive(Debug, Serialize)]
pub struct WeatherSummary {
    pub temp_mean: Option<f64>,
    pub wspm_mean: Option<f64>,
    pub rain_mean: Option<f64>,
}

/// One wind-direction slice: category label and occurrence count.
///
/// Percent-of-total is left to the rendering side.
#[derive(Debug, Serialize)]
pub struct DirectionCount {
    pub direction: String,
    pub count: u32,
}

/// Everything a rendering collaborator needs for one selection.
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    pub station: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub pollutants: Vec<PollutantSeries>,
    pub weather: WeatherSummary,
    pub wind_directions: Vec<DirectionCount>,
    pub records: Vec<PollutionRecord>,
}

fn non_nan(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

impl DashboardReport {
    /// Run the full filter-and-aggregate cycle for one selection.
    pub fn build(dataset: &Dataset, selection: &Selection) -> DashboardReport {
        let pollution_subset = filter(&dataset.pollution, selection);
        let wind_subset = filter(&dataset.wind, selection);

        let pollutants = Pollutant::ALL
            .into_iter()
            .map(|pollutant| PollutantSeries {
                pollutant: pollutant.label().to_string(),
                points: aggregate::pollutant_series(&pollution_subset, pollutant)
                    .into_iter()
                    .map(|(datetime, value)| SeriesPoint { datetime, value })
                    .collect(),
            })
            .collect();

        let weather = WeatherSummary {
            temp_mean: non_nan(aggregate::weather_mean(&pollution_subset, WeatherField::Temp)),
            wspm_mean: non_nan(aggregate::weather_mean(&pollution_subset, WeatherField::Wspm)),
            rain_mean: non_nan(aggregate::weather_mean(&pollution_subset, WeatherField::Rain)),
        };

        let wind_directions = aggregate::wind_direction_counts(&wind_subset)
            .into_iter()
            .map(|(direction, count)| DirectionCount {
                direction: direction.as_str().to_string(),
                count,
            })
            .collect();

        DashboardReport {
            station: selection.station.clone(),
            start: selection.date_range.start(),
            end: selection.date_range.end(),
            pollutants,
            weather,
            wind_directions,
            records: pollution_subset.into_iter().cloned().collect(),
        }
    }
}

/// Turn optional CLI arguments into a clamped, validated selection.
///
/// Defaults match the original dashboard: the first station and the full
/// dataset span. A reversed range is normalized by swapping; an out-of-span
/// range is clamped to the dataset bounds.
pub fn resolve_selection(
    dataset: &Dataset,
    station: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> anyhow::Result<Selection> {
    let default = dataset.default_selection();

    let station = match station {
        Some(requested) => {
            let stations = dataset.stations();
            if !stations.iter().any(|s| s == requested) {
                bail!(
                    "unknown station '{}'; available stations: {}",
                    requested,
                    stations.join(", ")
                );
            }
            requested.to_string()
        }
        None => default.station,
    };

    let start_date = match start {
        Some(s) => dates::parse_date(s).with_context(|| format!("invalid start date '{}'", s))?,
        None => default.date_range.start(),
    };
    let end_date = match end {
        Some(s) => dates::parse_date(s).with_context(|| format!("invalid end date '{}'", s))?,
        None => default.date_range.end(),
    };

    let (min, max) = dataset.span();
    let date_range = DateRange::new(start_date, end_date).clamp_to(min.date(), max.date());
    Ok(Selection::new(station, date_range))
}

/// List the distinct stations of the primary dataset.
pub fn run_stations(pollution_csv: &str, wind_csv: &str) -> anyhow::Result<()> {
    let dataset = load(pollution_csv, wind_csv)?;
    for station in dataset.stations() {
        println!("{}", station);
    }
    Ok(())
}

/// Print the datetime span covered by the primary dataset.
pub fn run_span(pollution_csv: &str, wind_csv: &str) -> anyhow::Result<()> {
    let dataset = load(pollution_csv, wind_csv)?;
    let (min, max) = dataset.span();
    println!(
        "{} to {}",
        dates::format_datetime(&min),
        dates::format_datetime(&max)
    );
    Ok(())
}

/// Build and print the dashboard report for one selection.
pub fn run_report(
    pollution_csv: &str,
    wind_csv: &str,
    station: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let dataset = load(pollution_csv, wind_csv)?;
    let selection = resolve_selection(&dataset, station, start, end)?;
    info!(
        "building report for {} from {} to {}",
        selection.station,
        selection.date_range.start(),
        selection.date_range.end()
    );

    let report = DashboardReport::build(&dataset, &selection);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn load(pollution_csv: &str, wind_csv: &str) -> anyhow::Result<Dataset> {
    Dataset::load(pollution_csv, wind_csv)
        .with_context(|| format!("failed to load datasets '{}' and '{}'", pollution_csv, wind_csv))
}

fn format_mean(mean: Option<f64>, unit: &str) -> String {
    match mean {
        Some(value) => format!("{:.1}{}", value, unit),
        None => "n/a".to_string(),
    }
}

fn print_report(report: &DashboardReport) {
    println!(
        "Data from {} station during {} until {}",
        report.station, report.start, report.end
    );
    println!();
    for series in &report.pollutants {
        let non_null = series.points.iter().filter(|p| p.value.is_some()).count();
        println!(
            "{}: {} points ({} with readings)",
            series.pollutant,
            series.points.len(),
            non_null
        );
    }
    println!();
    println!(
        "Average Temperature: {}",
        format_mean(report.weather.temp_mean, "\u{b0}C")
    );
    println!(
        "Average Wind Speed: {}",
        format_mean(report.weather.wspm_mean, "m/s")
    );
    println!(
        "Average Precipitation: {}",
        format_mean(report.weather.rain_mean, "mm")
    );
    println!();
    if report.wind_directions.is_empty() {
        println!("Wind direction tendencies: none recorded");
    } else {
        let tendencies: Vec<String> = report
            .wind_directions
            .iter()
            .map(|d| format!("{} {}", d.direction, d.count))
            .collect();
        println!("Wind direction tendencies: {}", tendencies.join(", "));
    }
    println!();
    println!("Raw records in selection: {}", report.records.len());
}

#[cfg(test)]
mod tests {
    use super::{resolve_selection, DashboardReport};
    use baq_dataset::store::Dataset;
    use chrono::NaiveDate;

    const POLLUTION_CSV: &str = "\
station,datetime,PM2.5,PM10,SO2,NO2,CO,O3,TEMP,WSPM,RAIN
Aotizhongxin,2013-03-01 00:00:00,10.0,20.0,3.0,14.0,350.0,82.0,5.0,1.2,0.0
Aotizhongxin,2013-03-02 00:00:00,,21.0,3.1,15.0,360.0,80.0,7.0,1.4,0.0
Aotizhongxin,2013-03-03 00:00:00,30.0,22.0,3.2,16.0,370.0,78.0,9.0,1.6,0.0
Dongsi,2013-03-02 12:00:00,50.0,60.0,5.0,25.0,500.0,70.0,6.0,2.0,0.0
";

    const WIND_CSV: &str = "\
station,datetime,wd
Aotizhongxin,2013-03-01 00:00:00,N
Aotizhongxin,2013-03-02 00:00:00,N
Aotizhongxin,2013-03-03 00:00:00,E
";

    fn dataset() -> Dataset {
        Dataset::from_csv(POLLUTION_CSV, WIND_CSV).unwrap()
    }

    #[test]
    fn test_defaults_pick_first_station_and_full_span() {
        let dataset = dataset();
        let selection = resolve_selection(&dataset, None, None, None).unwrap();
        assert_eq!(selection.station, "Aotizhongxin");
        assert_eq!(
            selection.date_range.start(),
            NaiveDate::from_ymd_opt(2013, 3, 1).unwrap()
        );
        assert_eq!(
            selection.date_range.end(),
            NaiveDate::from_ymd_opt(2013, 3, 3).unwrap()
        );
    }

    #[test]
    fn test_out_of_span_range_is_clamped() {
        let dataset = dataset();
        let selection =
            resolve_selection(&dataset, None, Some("2001-01-01"), Some("2031-01-01")).unwrap();
        assert_eq!(
            selection.date_range.start(),
            NaiveDate::from_ymd_opt(2013, 3, 1).unwrap()
        );
        assert_eq!(
            selection.date_range.end(),
            NaiveDate::from_ymd_opt(2013, 3, 3).unwrap()
        );
    }

    #[test]
    fn test_reversed_range_is_swapped() {
        let dataset = dataset();
        let selection =
            resolve_selection(&dataset, None, Some("2013-03-03"), Some("2013-03-01")).unwrap();
        assert!(selection.date_range.start() <= selection.date_range.end());
        assert_eq!(
            selection.date_range.start(),
            NaiveDate::from_ymd_opt(2013, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_unknown_station_is_rejected_with_candidates() {
        let dataset = dataset();
        let err = resolve_selection(&dataset, Some("Tiantan"), None, None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Tiantan"));
        assert!(message.contains("Aotizhongxin"));
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let dataset = dataset();
        assert!(resolve_selection(&dataset, None, Some("yesterday"), None).is_err());
    }

    #[test]
    fn test_report_carries_all_chart_inputs() {
        let dataset = dataset();
        let selection =
            resolve_selection(&dataset, None, Some("2013-03-01"), Some("2013-03-02")).unwrap();
        let report = DashboardReport::build(&dataset, &selection);

        assert_eq!(report.station, "Aotizhongxin");
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.pollutants.len(), 6);

        let pm25 = &report.pollutants[0];
        assert_eq!(pm25.pollutant, "PM2.5");
        assert_eq!(pm25.points.len(), 2);
        assert_eq!(pm25.points[0].value, Some(10.0));
        assert_eq!(pm25.points[1].value, None);

        let temp = report.weather.temp_mean.unwrap();
        assert!((temp - 6.0).abs() < f64::EPSILON);

        assert_eq!(report.wind_directions.len(), 1);
        assert_eq!(report.wind_directions[0].direction, "N");
        assert_eq!(report.wind_directions[0].count, 2);
    }

    #[test]
    fn test_empty_selection_serializes_without_nan() {
        let dataset = dataset();
        // Dongsi has one record on 03-02; select only 03-01 for it
        let selection =
            resolve_selection(&dataset, Some("Dongsi"), Some("2013-03-01"), Some("2013-03-01"))
                .unwrap();
        let report = DashboardReport::build(&dataset, &selection);
        assert!(report.records.is_empty());
        assert!(report.weather.temp_mean.is_none());

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"temp_mean\":null"));
        assert!(!json.contains("NaN"));
    }

    #[test]
    fn test_report_json_shape() {
        let dataset = dataset();
        let selection = resolve_selection(&dataset, None, None, None).unwrap();
        let report = DashboardReport::build(&dataset, &selection);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["station"], "Aotizhongxin");
        assert_eq!(value["pollutants"].as_array().unwrap().len(), 6);
        assert_eq!(value["records"][0]["PM2.5"], 10.0);
        assert_eq!(value["records"][0]["station"], "Aotizhongxin");
    }
}
