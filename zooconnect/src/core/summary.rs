//! Aggregate figures shown above a result list.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::types::Continent;
use crate::experience::Experience;

/// "Found N experiences across M continents".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub total: usize,
    pub continents: Vec<Continent>,
}

impl ResultSummary {
    pub fn of<'a, I>(experiences: I) -> Self
    where
        I: IntoIterator<Item = &'a Experience>,
    {
        let mut total = 0;
        let mut continents = BTreeSet::new();
        for experience in experiences {
            total += 1;
            continents.insert(experience.location.continent);
        }
        Self {
            total,
            continents: continents.into_iter().collect(),
        }
    }

    pub fn continent_count(&self) -> usize {
        self.continents.len()
    }
}
