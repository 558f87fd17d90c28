use crate::date_range::DateRange;

/// The user's current station and date-range choice.
///
/// A `Selection` is an explicit immutable value handed to the filter engine;
/// it carries no ambient state. The command layer is responsible for clamping
/// the range to the dataset span before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub station: String,
    pub date_range: DateRange,
}

impl Selection {
    pub fn new(station: impl Into<String>, date_range: DateRange) -> Self {
        Selection {
            station: station.into(),
            date_range,
        }
    }
}
