use std::collections::BTreeSet;

/// Parse comma-joined muscle-group strings from the exercise catalog into a
/// deduplicated, alphabetically sorted list. Whitespace around entries is
/// ignored, empty entries are dropped.
pub fn distinct_muscle_groups<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut groups = BTreeSet::new();
    for value in values {
        for group in value.split(',') {
            let group = group.trim();
            if !group.is_empty() {
                groups.insert(group.to_string());
            }
        }
    }
    groups.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dedups_and_sorts() {
        let rows = vec![
            "chest, triceps".to_string(),
            "chest,shoulders".to_string(),
            "hamstrings, glutes ,lower_back".to_string(),
        ];
        assert_eq!(
            distinct_muscle_groups(rows),
            vec![
                "chest",
                "glutes",
                "hamstrings",
                "lower_back",
                "shoulders",
                "triceps"
            ]
        );
    }

    #[test]
    fn empty_and_whitespace_entries_are_dropped() {
        let rows = vec!["chest,,  ,triceps".to_string(), "".to_string()];
        assert_eq!(distinct_muscle_groups(rows), vec!["chest", "triceps"]);
    }
}
