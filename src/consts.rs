/// Header names the loader requires in the input CSV
pub(crate) const COL_TIME: &str = "Time";
pub(crate) const COL_PROGRAM: &str = "Program";
pub(crate) const COL_COURSE: &str = "Course";
pub(crate) const COL_INTERACTIONS: &str = "Interactions";

/// Default input file when neither flag, env nor config names one
pub(crate) const DEFAULT_DATA_FILE: &str = "sampledata.csv";

/// Default bind address for the dashboard server
pub(crate) const DEFAULT_BIND: &str = "127.0.0.1:8050";

/// Page headline
pub(crate) const DASHBOARD_TITLE: &str = "Office Visits Analysis";

/// Y-axis label shared by all count charts
pub(crate) const VISITS_LABEL: &str = "Total Visits";

/// Weekday columns of the heatmap, in display order
pub(crate) const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
