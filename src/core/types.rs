//! Core data types for visit records and their derived views

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// One row of the visit dataset, with derived calendar fields cached at load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct VisitRecord {
    pub(crate) time: NaiveDateTime,
    pub(crate) program: String,
    pub(crate) course: String,
    /// `None` when the cell was blank
    pub(crate) interactions: Option<f64>,
    #[serde(serialize_with = "serialize_weekday")]
    pub(crate) weekday: Weekday,
    pub(crate) hour: u32,
}

impl VisitRecord {
    pub(crate) fn new(
        time: NaiveDateTime,
        program: String,
        course: String,
        interactions: Option<f64>,
    ) -> Self {
        VisitRecord {
            weekday: time.weekday(),
            hour: time.hour(),
            time,
            program,
            course,
            interactions,
        }
    }

    pub(crate) fn month_name(&self) -> &'static str {
        month_name(self.time.month())
    }
}

fn serialize_weekday<S: serde::Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(weekday_name(*day))
}

pub(crate) fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English month name for a 1-based month number
pub(crate) fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// The full dataset, loaded once and never mutated
#[derive(Debug, Clone, Default)]
pub(crate) struct Dataset {
    pub(crate) records: Vec<VisitRecord>,
}

impl Dataset {
    pub(crate) fn new(records: Vec<VisitRecord>) -> Self {
        Self { records }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Current values of the bound program and month dropdowns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SelectionState {
    pub(crate) program: String,
    pub(crate) month: String,
}

impl SelectionState {
    pub(crate) fn new(program: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            month: month.into(),
        }
    }
}

/// Dataset-wide aggregates. Always computed from the unfiltered dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct SummaryStats {
    pub(crate) most_visited_program: Option<String>,
    pub(crate) most_visited_course: Option<String>,
    pub(crate) busiest_hour: Option<u32>,
    /// One interaction per row, so this equals the row count
    pub(crate) total_interactions: usize,
    pub(crate) programs: Vec<String>,
    pub(crate) courses: Vec<String>,
    pub(crate) months: Vec<String>,
}

impl SummaryStats {
    /// Selection the page opens with: most-visited program, first month seen
    pub(crate) fn initial_selection(&self) -> SelectionState {
        SelectionState {
            program: self.most_visited_program.clone().unwrap_or_default(),
            month: self.months.first().cloned().unwrap_or_default(),
        }
    }
}

/// A category label and how many rows carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CategoryCount {
    pub(crate) label: String,
    pub(crate) count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn visit_record_derives_weekday_and_hour() {
        // 2024-01-05 is a Friday
        let r = VisitRecord::new(at(2024, 1, 5, 9), "A".into(), "X".into(), Some(3.0));
        assert_eq!(r.weekday, Weekday::Fri);
        assert_eq!(weekday_name(r.weekday), "Friday");
        assert_eq!(r.hour, 9);
        assert_eq!(r.month_name(), "January");
    }

    #[test]
    fn month_names_cover_the_year() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn visit_record_serializes_weekday_as_name() {
        let r = VisitRecord::new(at(2024, 2, 1, 10), "B".into(), "X".into(), None);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["weekday"], "Thursday");
        assert_eq!(json["time"], "2024-02-01T10:00:00");
        assert_eq!(json["hour"], 10);
        assert!(json["interactions"].is_null());
    }

    #[test]
    fn initial_selection_uses_most_visited_and_first_month() {
        let summary = SummaryStats {
            most_visited_program: Some("A".into()),
            months: vec!["March".into(), "January".into()],
            ..Default::default()
        };
        assert_eq!(
            summary.initial_selection(),
            SelectionState::new("A", "March")
        );
    }

    #[test]
    fn initial_selection_of_empty_summary_is_blank() {
        assert_eq!(
            SummaryStats::default().initial_selection(),
            SelectionState::default()
        );
    }
}
