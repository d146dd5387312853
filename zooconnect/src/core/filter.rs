//! Multi-predicate filtering over the experience catalog.
//!
//! Categories combine with AND; values within one category combine with OR.
//! An empty category imposes no constraint. The filter is total: contradictory
//! options (e.g. `min > max`) simply produce an empty result.

use serde::{Deserialize, Serialize};

use crate::core::types::{Continent, VolunteerTask, WildlifeType};
use crate::experience::Experience;

/// Records with at most this many requirements count as beginner friendly.
///
/// This is a proxy; the catalog carries no real accessibility attribute.
pub const BEGINNER_FRIENDLY_MAX_REQUIREMENTS: usize = 3;

/// Caller-owned query narrowing the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub continent: Vec<Continent>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub country: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wildlife_types: Vec<WildlifeType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volunteer_tasks: Vec<VolunteerTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationBounds>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub accessible: bool,
}

/// Week bounds; either side may be absent. A bound of `0` counts as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationBounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl DurationBounds {
    /// Lower bound that actually constrains, if any.
    pub fn effective_min(&self) -> Option<u32> {
        self.min.filter(|weeks| *weeks > 0)
    }

    /// Upper bound that actually constrains, if any.
    pub fn effective_max(&self) -> Option<u32> {
        self.max.filter(|weeks| *weeks > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.effective_min().is_none() && self.effective_max().is_none()
    }
}

impl FilterOptions {
    /// True when no category constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.continent.is_empty()
            && self.country.is_empty()
            && self.wildlife_types.is_empty()
            && self.volunteer_tasks.is_empty()
            && self.duration.is_none_or(|bounds| bounds.is_empty())
            && !self.accessible
    }

    /// Whether a single record satisfies every populated category.
    pub fn matches(&self, experience: &Experience) -> bool {
        self.matches_continent(experience)
            && self.matches_country(experience)
            && self.matches_wildlife(experience)
            && self.matches_tasks(experience)
            && self.matches_duration(experience)
            && self.matches_accessibility(experience)
    }

    fn matches_continent(&self, experience: &Experience) -> bool {
        self.continent.is_empty() || self.continent.contains(&experience.location.continent)
    }

    fn matches_country(&self, experience: &Experience) -> bool {
        self.country.is_empty()
            || self
                .country
                .iter()
                .any(|country| country.trim().eq_ignore_ascii_case(&experience.location.country))
    }

    fn matches_wildlife(&self, experience: &Experience) -> bool {
        self.wildlife_types.is_empty()
            || experience
                .wildlife_types
                .iter()
                .any(|kind| self.wildlife_types.contains(kind))
    }

    fn matches_tasks(&self, experience: &Experience) -> bool {
        self.volunteer_tasks.is_empty()
            || experience
                .volunteer_tasks
                .iter()
                .any(|task| self.volunteer_tasks.contains(task))
    }

    fn matches_duration(&self, experience: &Experience) -> bool {
        let Some(bounds) = self.duration else {
            return true;
        };
        let range = experience.duration;
        if bounds.effective_min().is_some_and(|min| range.min_weeks < min) {
            return false;
        }
        if let Some(max) = bounds.effective_max() {
            // Either the programme can start short enough, or its longest
            // option still fits under the bound.
            let starts_within = range.min_weeks <= max;
            let ends_within = range.max_weeks.is_some_and(|upper| upper <= max);
            if !(starts_within || ends_within) {
                return false;
            }
        }
        true
    }

    fn matches_accessibility(&self, experience: &Experience) -> bool {
        !self.accessible || experience.requirements.len() <= BEGINNER_FRIENDLY_MAX_REQUIREMENTS
    }
}

/// Return the records matching `options`, preserving catalog order.
pub fn filter_experiences<'a, I>(catalog: I, options: &FilterOptions) -> Vec<&'a Experience>
where
    I: IntoIterator<Item = &'a Experience>,
{
    catalog
        .into_iter()
        .filter(|experience| options.matches(experience))
        .collect()
}
