//! Filtering and aggregation for air-quality observations.
//!
//! This crate is the computational half of the dashboard: given the
//! read-only dataset and a selection, it produces the filtered subsets and
//! the per-chart aggregates. Everything here is pure; rendering belongs to
//! an external collaborator.

/// Station and date-range subset extraction.
pub mod filter {
    use baq_dataset::record::StationSeries;
    use baq_dataset::selection::Selection;

    /// Extract the records matching a selection.
    ///
    /// A record is retained iff its station equals the selected station and
    /// its timestamp falls inside the date range, inclusive on both ends.
    /// Input order is preserved (the store sorts by datetime at load, so the
    /// subset is already in time-series order). A station that matches no
    /// record yields an empty subset, not an error.
    pub fn filter<'a, R: StationSeries>(records: &'a [R], selection: &Selection) -> Vec<&'a R> {
        records
            .iter()
            .filter(|r| {
                r.station() == selection.station && selection.date_range.contains(r.datetime())
            })
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::filter;
        use baq_dataset::date_range::DateRange;
        use baq_dataset::record::{PollutionRecord, StationSeries};
        use baq_dataset::selection::Selection;
        use chrono::{NaiveDate, NaiveDateTime};

        fn dt(day: u32, hour: u32) -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2013, 3, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap()
        }

        fn record(station: &str, day: u32, hour: u32) -> PollutionRecord {
            PollutionRecord {
                station: station.to_string(),
                datetime: dt(day, hour),
                pm2_5: None,
                pm10: None,
                so2: None,
                no2: None,
                co: None,
                o3: None,
                temp: None,
                wspm: None,
                rain: None,
            }
        }

        fn selection(station: &str, start_day: u32, end_day: u32) -> Selection {
            Selection::new(
                station,
                DateRange::new(
                    NaiveDate::from_ymd_opt(2013, 3, start_day).unwrap(),
                    NaiveDate::from_ymd_opt(2013, 3, end_day).unwrap(),
                ),
            )
        }

        /// Build a deterministic spread of records across stations and days.
        fn generated_records() -> Vec<PollutionRecord> {
            let stations = ["Aotizhongxin", "Dongsi", "Wanliu"];
            let mut records = Vec::new();
            for day in 1..=9 {
                for hour in [0, 6, 12, 23] {
                    let station = stations[((day + hour) % 3) as usize];
                    records.push(record(station, day, hour));
                }
            }
            records
        }

        #[test]
        fn test_no_false_positives_or_negatives() {
            let records = generated_records();
            for station in ["Aotizhongxin", "Dongsi", "Wanliu", "Gucheng"] {
                let sel = selection(station, 3, 6);
                let subset = filter(&records, &sel);
                // every kept record satisfies the predicate
                for r in &subset {
                    assert_eq!(r.station(), station);
                    assert!(sel.date_range.contains(r.datetime()));
                }
                // and nothing satisfying the predicate was dropped
                let expected = records
                    .iter()
                    .filter(|r| r.station == station && sel.date_range.contains(r.datetime))
                    .count();
                assert_eq!(subset.len(), expected);
            }
        }

        #[test]
        fn test_full_span_is_identity_per_station() {
            let records = generated_records();
            let sel = selection("Dongsi", 1, 9);
            let subset = filter(&records, &sel);
            let all_dongsi = records.iter().filter(|r| r.station == "Dongsi").count();
            assert_eq!(subset.len(), all_dongsi);
        }

        #[test]
        fn test_unknown_station_yields_empty_subset() {
            let records = generated_records();
            let subset = filter(&records, &selection("Tiantan", 1, 9));
            assert!(subset.is_empty());
        }

        #[test]
        fn test_filter_is_idempotent() {
            let records = generated_records();
            let sel = selection("Wanliu", 2, 7);
            let first: Vec<NaiveDateTime> = filter(&records, &sel)
                .iter()
                .map(|r| r.datetime)
                .collect();
            let second: Vec<NaiveDateTime> = filter(&records, &sel)
                .iter()
                .map(|r| r.datetime)
                .collect();
            assert_eq!(first, second);
        }

        #[test]
        fn test_filter_preserves_input_order() {
            let records = generated_records();
            let subset = filter(&records, &selection("Aotizhongxin", 1, 9));
            for pair in subset.windows(2) {
                // generated records are appended day by day, so input order
                // is datetime order
                assert!(pair[0].datetime <= pair[1].datetime);
            }
        }

        #[test]
        fn test_end_date_covers_its_whole_day() {
            let records = vec![record("Dongsi", 2, 23)];
            let subset = filter(&records, &selection("Dongsi", 1, 2));
            assert_eq!(subset.len(), 1);
        }
    }
}

/// Pure per-chart aggregate computation.
pub mod aggregate {
    use baq_dataset::compass::CompassDirection;
    use baq_dataset::field::{Pollutant, WeatherField};
    use baq_dataset::record::{PollutionRecord, WindRecord};
    use chrono::NaiveDateTime;
    use std::collections::HashMap;
    use std::hash::Hash;

    /// The ordered time series for one pollutant over a filtered subset.
    ///
    /// Null readings are preserved as `None` so charts render them as gaps,
    /// never as zeros.
    pub fn pollutant_series(
        subset: &[&PollutionRecord],
        pollutant: Pollutant,
    ) -> Vec<(NaiveDateTime, Option<f64>)> {
        subset
            .iter()
            .map(|r| (r.datetime, r.pollutant(pollutant)))
            .collect()
    }

    /// Arithmetic mean of one weather variable over the non-null readings.
    ///
    /// Returns NaN when the subset is empty or all readings are null; that
    /// is the contract for a degenerate selection, not an error.
    pub fn weather_mean(subset: &[&PollutionRecord], field: WeatherField) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for record in subset {
            if let Some(value) = record.weather(field) {
                sum += value;
                count += 1;
            }
        }
        if count == 0 {
            f64::NAN
        } else {
            sum / count as f64
        }
    }

    /// Count category occurrences, ordered by descending count.
    ///
    /// Ties keep first-seen order: the stable sort leaves equal counts in
    /// the order their categories first appeared in the input.
    pub fn category_counts<C>(values: impl IntoIterator<Item = C>) -> Vec<(C, u32)>
    where
        C: Eq + Hash + Clone,
    {
        let mut order: Vec<(C, u32)> = Vec::new();
        let mut index: HashMap<C, usize> = HashMap::new();
        for value in values {
            match index.get(&value) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(value.clone(), order.len());
                    order.push((value, 1));
                }
            }
        }
        order.sort_by(|a, b| b.1.cmp(&a.1));
        order
    }

    /// Wind-direction counts over a filtered wind subset, nulls skipped.
    pub fn wind_direction_counts(subset: &[&WindRecord]) -> Vec<(CompassDirection, u32)> {
        category_counts(subset.iter().filter_map(|r| r.wind_direction))
    }

}
