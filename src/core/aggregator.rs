//! Group-and-count logic shared by the summary and the chart builders

use std::collections::HashMap;
use std::hash::Hash;

use crate::core::types::{CategoryCount, Dataset, SummaryStats};

/// Count occurrences of each key.
///
/// Result is ordered by count descending; keys with equal counts keep the
/// order in which they were first seen.
pub(crate) fn value_counts<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent key. Ties go to the key encountered first.
pub(crate) fn most_frequent<K, I>(keys: I) -> Option<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    value_counts(keys).into_iter().next().map(|(k, _)| k)
}

/// Distinct keys in order of first appearance
pub(crate) fn unique_ordered<K, I>(keys: I) -> Vec<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut seen = std::collections::HashSet::new();
    keys.into_iter()
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

/// String-keyed counts in chart order
pub(crate) fn category_counts<'a, I>(labels: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a str>,
{
    value_counts(labels)
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

/// Compute the dataset-wide summary shown above the charts
pub(crate) fn summarize(dataset: &Dataset) -> SummaryStats {
    let records = &dataset.records;

    SummaryStats {
        most_visited_program: most_frequent(records.iter().map(|r| r.program.as_str()))
            .map(str::to_string),
        most_visited_course: most_frequent(records.iter().map(|r| r.course.as_str()))
            .map(str::to_string),
        busiest_hour: most_frequent(records.iter().map(|r| r.hour)),
        total_interactions: dataset.len(),
        programs: unique_ordered(records.iter().map(|r| r.program.clone())),
        courses: unique_ordered(records.iter().map(|r| r.course.clone())),
        months: unique_ordered(records.iter().map(|r| r.month_name().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::sample_dataset;

    #[test]
    fn value_counts_orders_by_count_then_first_seen() {
        let counts = value_counts(["b", "a", "c", "a", "c", "d"]);
        assert_eq!(counts, vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn value_counts_of_nothing_is_empty() {
        let counts: Vec<(&str, usize)> = value_counts(Vec::<&str>::new());
        assert!(counts.is_empty());
    }

    #[test]
    fn most_frequent_tie_goes_to_first_seen() {
        assert_eq!(most_frequent(["y", "x", "x", "y"]), Some("y"));
        assert_eq!(most_frequent(["x", "y", "y"]), Some("y"));
        assert_eq!(most_frequent(Vec::<u32>::new()), None);
    }

    #[test]
    fn unique_ordered_keeps_first_appearance() {
        assert_eq!(unique_ordered([3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn category_counts_converts_labels() {
        let counts = category_counts(["X", "Y", "X"]);
        assert_eq!(counts[0].label, "X");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].label, "Y");
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn summarize_sample_dataset() {
        let summary = summarize(&sample_dataset());
        assert_eq!(summary.most_visited_program.as_deref(), Some("A"));
        assert_eq!(summary.most_visited_course.as_deref(), Some("X"));
        assert_eq!(summary.busiest_hour, Some(9));
        assert_eq!(summary.total_interactions, 3);
        assert_eq!(summary.programs, vec!["A", "B"]);
        assert_eq!(summary.courses, vec!["X", "Y"]);
        assert_eq!(summary.months, vec!["January", "February"]);
    }

    #[test]
    fn summarize_total_is_row_count_not_interaction_sum() {
        let dataset = sample_dataset();
        let sum: f64 = dataset.records.iter().filter_map(|r| r.interactions).sum();
        let summary = summarize(&dataset);
        assert_eq!(summary.total_interactions, dataset.len());
        assert_ne!(summary.total_interactions as f64, sum);
    }

    #[test]
    fn summarize_empty_dataset() {
        let summary = summarize(&Dataset::default());
        assert_eq!(summary.most_visited_program, None);
        assert_eq!(summary.busiest_hour, None);
        assert_eq!(summary.total_interactions, 0);
        assert!(summary.months.is_empty());
    }
}
