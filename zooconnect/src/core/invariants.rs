//! Semantic catalog invariants checked after deserialization.
//!
//! Id uniqueness spans records and week ordering spans fields, so neither is
//! expressed in the JSON Schema.

use std::collections::HashSet;

use crate::experience::Experience;

/// Highest rating a review can give.
pub const MAX_RATING: f64 = 5.0;

/// Check semantic invariants across the whole catalog:
/// - No duplicate ids
/// - `minWeeks >= 1`
/// - `maxWeeks >= minWeeks` when present
/// - Non-empty `wildlifeTypes` and `volunteerTasks`
/// - `rating` within `0..=5`
pub fn validate_invariants(experiences: &[Experience]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    for (index, experience) in experiences.iter().enumerate() {
        let path = format!("[{}] {}", index, experience.id);
        if !seen.insert(experience.id.as_str()) {
            errors.push(format!("duplicate id '{}' at {}", experience.id, path));
        }
        validate_experience(experience, &path, &mut errors);
    }
    errors
}

fn validate_experience(experience: &Experience, path: &str, errors: &mut Vec<String>) {
    if experience.id.trim().is_empty() {
        errors.push(format!("{}: id must not be blank", path));
    }

    let duration = experience.duration;
    if duration.min_weeks == 0 {
        errors.push(format!("{}: duration.minWeeks must be >= 1", path));
    }
    if let Some(max) = duration.max_weeks.filter(|max| *max < duration.min_weeks) {
        errors.push(format!(
            "{}: duration.maxWeeks {} is below minWeeks {}",
            path, max, duration.min_weeks
        ));
    }

    if experience.wildlife_types.is_empty() {
        errors.push(format!("{}: wildlifeTypes must not be empty", path));
    }
    if experience.volunteer_tasks.is_empty() {
        errors.push(format!("{}: volunteerTasks must not be empty", path));
    }

    if !(0.0..=MAX_RATING).contains(&experience.rating) {
        errors.push(format!(
            "{}: rating {} outside 0..={}",
            path, experience.rating, MAX_RATING
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Continent, WildlifeType};
    use crate::test_support::experience;

    #[test]
    fn valid_catalog_has_no_errors() {
        let catalog = vec![
            experience("a", Continent::Africa, &[WildlifeType::BigCats], 2, Some(6)),
            experience("b", Continent::Asia, &[WildlifeType::Elephants], 4, None),
        ];
        assert!(validate_invariants(&catalog).is_empty());
    }

    #[test]
    fn reports_every_violation() {
        let mut dup = experience("a", Continent::Africa, &[WildlifeType::BigCats], 0, None);
        dup.wildlife_types.clear();
        dup.rating = 7.5;
        let catalog = vec![
            experience("a", Continent::Africa, &[WildlifeType::BigCats], 6, Some(2)),
            dup,
        ];

        let errors = validate_invariants(&catalog);
        assert!(errors.iter().any(|err| err.contains("duplicate id 'a'")));
        assert!(errors.iter().any(|err| err.contains("below minWeeks")));
        assert!(errors.iter().any(|err| err.contains("minWeeks must be >= 1")));
        assert!(errors.iter().any(|err| err.contains("wildlifeTypes")));
        assert!(errors.iter().any(|err| err.contains("rating 7.5")));
    }
}
