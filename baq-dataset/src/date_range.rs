use chrono::{NaiveDate, NaiveDateTime};

/// An inclusive calendar date range used to filter hourly records.
///
/// Construction normalizes a reversed pair by swapping, so `start <= end`
/// always holds. Containment is by calendar date: a record timestamped any
/// hour of the end date is inside the range.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range from two dates, swapping them if they arrive reversed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            DateRange { start, end }
        } else {
            DateRange { start: end, end: start }
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether a timestamp falls inside the range, both ends inclusive.
    pub fn contains(&self, datetime: NaiveDateTime) -> bool {
        let date = datetime.date();
        self.start <= date && date <= self.end
    }

    /// Clamp both bounds into `[min, max]`.
    ///
    /// Clamping each bound independently preserves `start <= end`.
    pub fn clamp_to(&self, min: NaiveDate, max: NaiveDate) -> DateRange {
        DateRange {
            start: self.start.clamp(min, max),
            end: self.end.clamp(min, max),
        }
    }
}
