//! Binding of URL query strings and filter-panel form bodies to [`FilterOptions`].
//!
//! Binding never fails. Values that do not parse are dropped (no constraint)
//! and listed in [`QueryBinding::ignored`] so callers can log them.

use std::str::FromStr;

use tracing::{debug, warn};
use url::form_urlencoded;

use crate::core::filter::FilterOptions;
use crate::core::panel::{FilterPanel, SLIDER_MAX_WEEKS, SLIDER_MIN_WEEKS};
use crate::core::types::ViewMode;

/// Result of binding a query string or form body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBinding {
    pub options: FilterOptions,
    /// Free-text search. Carried through but not used for filtering.
    pub search: Option<String>,
    /// Requested listing layout. Never affects `options`.
    pub view: Option<ViewMode>,
    /// `key=value` pairs whose value could not be parsed.
    pub ignored: Vec<String>,
}

/// Bind navigation parameters (`continent`, `wildlifeType`, `search`, `view`).
///
/// Each key is single-valued: the first non-empty occurrence wins. Any other
/// key is ignored.
pub fn bind_query(query: &str) -> QueryBinding {
    let mut binding = QueryBinding::default();
    let mut seen_continent = false;
    let mut seen_wildlife = false;
    let mut seen_view = false;

    for (key, value) in non_empty_pairs(query) {
        match key.as_str() {
            "continent" if !seen_continent => {
                seen_continent = true;
                if let Some(continent) = parse_value(&key, &value, &mut binding.ignored) {
                    binding.options.continent.push(continent);
                }
            }
            "wildlifeType" if !seen_wildlife => {
                seen_wildlife = true;
                if let Some(kind) = parse_value(&key, &value, &mut binding.ignored) {
                    binding.options.wildlife_types.push(kind);
                }
            }
            "view" if !seen_view => {
                seen_view = true;
                binding.view = parse_value(&key, &value, &mut binding.ignored);
            }
            "search" if binding.search.is_none() => {
                debug!(search = %value, "search query received");
                binding.search = Some(value);
            }
            _ => {}
        }
    }

    binding
}

/// Bind a submitted filter-panel form by replaying it onto a fresh
/// [`FilterPanel`].
///
/// Multi-valued keys (`continent`, `country`, `wildlifeType`, `volunteerTask`)
/// may repeat. `minWeeks`/`maxWeeks` are slider handles (see
/// [`FilterPanel::set_duration`]) and `accessible` is any of `on`, `true`, `1`.
/// A `reset` key clears every filter. `view` may repeat and the last value
/// wins, so a submit button overrides the page's current layout.
pub fn bind_panel_form(body: &str) -> QueryBinding {
    let mut binding = QueryBinding::default();
    let mut panel = FilterPanel::default();
    let mut low = None;
    let mut high = None;
    let mut reset = false;

    for (key, value) in non_empty_pairs(body) {
        match key.as_str() {
            "continent" => {
                if let Some(continent) = parse_value(&key, &value, &mut binding.ignored) {
                    panel.toggle_continent(continent, true);
                }
            }
            "wildlifeType" => {
                if let Some(kind) = parse_value(&key, &value, &mut binding.ignored) {
                    panel.toggle_wildlife_type(kind, true);
                }
            }
            "volunteerTask" => {
                if let Some(task) = parse_value(&key, &value, &mut binding.ignored) {
                    panel.toggle_volunteer_task(task, true);
                }
            }
            "country" => panel.toggle_country(&value, true),
            "minWeeks" => low = parse_weeks(&key, &value, &mut binding.ignored),
            "maxWeeks" => high = parse_weeks(&key, &value, &mut binding.ignored),
            "accessible" => panel.set_accessible(is_checked(&value)),
            "search" => binding.search = Some(value),
            "view" => {
                if let Some(view) = parse_value(&key, &value, &mut binding.ignored) {
                    binding.view = Some(view);
                }
            }
            "reset" => reset = true,
            _ => {}
        }
    }

    if low.is_some() || high.is_some() {
        panel.set_duration(
            low.unwrap_or(SLIDER_MIN_WEEKS),
            high.unwrap_or(SLIDER_MAX_WEEKS),
        );
    }
    binding.options = if reset { panel.reset() } else { panel.apply() };
    binding
}

/// Encode options back into a navigation query string.
///
/// Only the first continent and wildlife type survive, matching what
/// [`bind_query`] accepts.
pub fn to_query(options: &FilterOptions, search: Option<&str>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if let Some(continent) = options.continent.first() {
        serializer.append_pair("continent", continent.as_str());
    }
    if let Some(kind) = options.wildlife_types.first() {
        serializer.append_pair("wildlifeType", kind.as_str());
    }
    if let Some(search) = search.filter(|s| !s.trim().is_empty()) {
        serializer.append_pair("search", search);
    }
    serializer.finish()
}

fn non_empty_pairs(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.trim().to_string()))
        .filter(|(_, value)| !value.is_empty())
}

fn parse_value<T>(key: &str, value: &str, ignored: &mut Vec<String>) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(key, value, error = %err, "ignoring unrecognized filter value");
            ignored.push(format!("{}={}", key, value));
            None
        }
    }
}

fn parse_weeks(key: &str, value: &str, ignored: &mut Vec<String>) -> Option<u32> {
    match value.parse::<u32>() {
        Ok(weeks) => Some(weeks),
        Err(err) => {
            warn!(key, value, error = %err, "ignoring non-numeric week bound");
            ignored.push(format!("{}={}", key, value));
            None
        }
    }
}

fn is_checked(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "on" | "true" | "1")
}
