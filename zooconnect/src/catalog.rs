use crate::core::filter::{FilterOptions, filter_experiences};
use crate::experience::Experience;

/// Read-only collection of experiences, populated once and never mutated.
///
/// Share it behind an `Arc`; concurrent readers need no locking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    experiences: Vec<Experience>,
}

impl Catalog {
    pub fn new(experiences: Vec<Experience>) -> Self {
        Self { experiences }
    }

    pub fn all(&self) -> &[Experience] {
        &self.experiences
    }

    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Experience> {
        self.experiences.iter().find(|experience| experience.id == id)
    }

    /// Highlighted subset, in catalog order.
    pub fn featured(&self) -> Vec<&Experience> {
        self.experiences
            .iter()
            .filter(|experience| experience.is_featured())
            .collect()
    }

    pub fn filter(&self, options: &FilterOptions) -> Vec<&Experience> {
        filter_experiences(&self.experiences, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Continent, WildlifeType};
    use crate::test_support::experience;

    fn sample() -> Catalog {
        let mut lions = experience("lions", Continent::Africa, &[WildlifeType::BigCats], 2, None);
        lions.featured = Some(true);
        let turtles = experience(
            "turtles",
            Continent::Oceania,
            &[WildlifeType::MarineLife],
            1,
            Some(4),
        );
        let mut apes = experience("apes", Continent::Asia, &[WildlifeType::Primates], 3, None);
        apes.featured = Some(true);
        Catalog::new(vec![lions, turtles, apes])
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = sample();
        assert_eq!(catalog.get("turtles").map(|e| e.title.as_str()), Some("turtles title"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn featured_keeps_catalog_order() {
        let catalog = sample();
        let ids: Vec<&str> = catalog.featured().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["lions", "apes"]);
    }

    #[test]
    fn filter_does_not_mutate_catalog() {
        let catalog = sample();
        let before = catalog.clone();
        let options = FilterOptions {
            continent: vec![Continent::Asia],
            ..FilterOptions::default()
        };
        assert_eq!(catalog.filter(&options).len(), 1);
        assert_eq!(catalog, before);
    }
}
