//! Draft state behind the filter sidebar.
//!
//! Edits accumulate in a draft and only take effect on [`FilterPanel::apply`].
//! The applied options are owned by the caller; the panel never holds them.

use crate::core::filter::{DurationBounds, FilterOptions};
use crate::core::types::{Continent, VolunteerTask, WildlifeType};
use crate::experience::OPEN_ENDED_WEEKS;

/// Lower end of the duration slider.
pub const SLIDER_MIN_WEEKS: u32 = 1;
/// Upper end of the duration slider.
pub const SLIDER_MAX_WEEKS: u32 = OPEN_ENDED_WEEKS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    draft: FilterOptions,
}

impl FilterPanel {
    /// Start editing from the currently applied options.
    pub fn new(applied: &FilterOptions) -> Self {
        Self {
            draft: applied.clone(),
        }
    }

    pub fn draft(&self) -> &FilterOptions {
        &self.draft
    }

    pub fn toggle_continent(&mut self, continent: Continent, checked: bool) {
        toggle(&mut self.draft.continent, continent, checked);
    }

    pub fn toggle_wildlife_type(&mut self, kind: WildlifeType, checked: bool) {
        toggle(&mut self.draft.wildlife_types, kind, checked);
    }

    pub fn toggle_volunteer_task(&mut self, task: VolunteerTask, checked: bool) {
        toggle(&mut self.draft.volunteer_tasks, task, checked);
    }

    pub fn toggle_country(&mut self, country: &str, checked: bool) {
        toggle(&mut self.draft.country, country.trim().to_string(), checked);
    }

    /// Set both slider handles. Values are clamped to the slider range and
    /// reordered if the handles crossed. A handle resting on its own end of
    /// the slider is no bound, so the full range clears the duration filter.
    pub fn set_duration(&mut self, low: u32, high: u32) {
        let low = low.clamp(SLIDER_MIN_WEEKS, SLIDER_MAX_WEEKS);
        let high = high.clamp(SLIDER_MIN_WEEKS, SLIDER_MAX_WEEKS);
        let bounds = DurationBounds {
            min: Some(low.min(high)).filter(|weeks| *weeks != SLIDER_MIN_WEEKS),
            max: Some(low.max(high)).filter(|weeks| *weeks != SLIDER_MAX_WEEKS),
        };
        self.draft.duration = (!bounds.is_empty()).then_some(bounds);
    }

    pub fn set_accessible(&mut self, checked: bool) {
        self.draft.accessible = checked;
    }

    /// The draft becomes the applied options.
    pub fn apply(&self) -> FilterOptions {
        self.draft.clone()
    }

    /// Clear the draft and return empty options to apply immediately.
    pub fn reset(&mut self) -> FilterOptions {
        self.draft = FilterOptions::default();
        self.draft.clone()
    }

    /// Badge count shown on the collapsed panel.
    pub fn active_count(&self) -> usize {
        self.draft.wildlife_types.len()
            + self.draft.volunteer_tasks.len()
            + self.draft.continent.len()
    }

    /// Slider caption, e.g. `"1 - 12+"`.
    pub fn duration_label(&self) -> String {
        let bounds = self.draft.duration.unwrap_or_default();
        format!(
            "{} - {}+",
            bounds.min.unwrap_or(SLIDER_MIN_WEEKS),
            bounds.max.unwrap_or(SLIDER_MAX_WEEKS)
        )
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T, checked: bool) {
    if checked {
        if !values.contains(&value) {
            values.push(value);
        }
    } else {
        values.retain(|existing| *existing != value);
    }
}
