//! Closed enumerations shared by the catalog, filters and presentation.
//!
//! Every variant serializes to its display name (`"Big Cats"`, `"North America"`)
//! so catalog files and query strings use the same vocabulary as the UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when text does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Lowercase and fold `-`/`_` into spaces so `big-cats`, `Big_Cats` and
/// `Big Cats` all parse to the same variant.
fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

macro_rules! display_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(raw);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|candidate| normalize(candidate.as_str()) == wanted)
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: raw.to_string(),
                    })
            }
        }
    };
}

display_enum! {
    /// Continent an experience is located on.
    Continent, "continent" {
        Africa => "Africa",
        Asia => "Asia",
        Europe => "Europe",
        NorthAmerica => "North America",
        Oceania => "Oceania",
        SouthAmerica => "South America",
    }
}

display_enum! {
    /// Kind of animal a sanctuary works with.
    WildlifeType, "wildlife type" {
        BigCats => "Big Cats",
        Primates => "Primates",
        Elephants => "Elephants",
        MarineLife => "Marine Life",
        Birds => "Birds",
        GeneralWildlife => "General Wildlife",
    }
}

display_enum! {
    /// Work a volunteer takes part in.
    VolunteerTask, "volunteer task" {
        FoodPreparation => "Food Preparation",
        HabitatMaintenance => "Habitat Maintenance",
        AnimalRehabilitation => "Animal Rehabilitation",
        Research => "Research",
        Education => "Education",
        Conservation => "Conservation",
    }
}

impl WildlifeType {
    /// Short blurb shown on the detail page's wildlife tab.
    pub fn blurb(self) -> &'static str {
        match self {
            WildlifeType::BigCats => {
                "Including lions, tigers, cheetahs, and other endangered feline species."
            }
            WildlifeType::Primates => "Including various monkey species, apes, and lemurs.",
            WildlifeType::Elephants => {
                "Asian elephants rescued from tourism and logging industries."
            }
            WildlifeType::MarineLife => "Sea turtles, coral reefs, and various marine ecosystems.",
            WildlifeType::Birds => "Various native and migratory bird species.",
            WildlifeType::GeneralWildlife => {
                "A diverse range of animals including mammals, reptiles, and amphibians."
            }
        }
    }
}

impl VolunteerTask {
    /// Short blurb shown on the detail page's tasks tab.
    pub fn blurb(self) -> &'static str {
        match self {
            VolunteerTask::FoodPreparation => {
                "Preparing and distributing food for animals according to dietary requirements."
            }
            VolunteerTask::HabitatMaintenance => {
                "Cleaning enclosures, maintaining enrichment structures, and ensuring a safe environment."
            }
            VolunteerTask::AnimalRehabilitation => {
                "Assisting with care for injured or rescued animals under professional supervision."
            }
            VolunteerTask::Research => {
                "Collecting data, monitoring behavior, and supporting ongoing conservation studies."
            }
            VolunteerTask::Education => {
                "Participating in or supporting educational programs for visitors and local communities."
            }
            VolunteerTask::Conservation => {
                "Contributing to habitat restoration, anti-poaching initiatives, or other conservation efforts."
            }
        }
    }
}

/// Layout of the listing page. Has no effect on which experiences match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl FromStr for ViewMode {
    type Err = UnknownVariant;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(UnknownVariant {
                kind: "view mode",
                value: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names_and_cli_spellings() {
        assert_eq!("Big Cats".parse::<WildlifeType>(), Ok(WildlifeType::BigCats));
        assert_eq!("big-cats".parse::<WildlifeType>(), Ok(WildlifeType::BigCats));
        assert_eq!(
            "north_america".parse::<Continent>(),
            Ok(Continent::NorthAmerica)
        );
        assert_eq!(
            " Animal Rehabilitation ".parse::<VolunteerTask>(),
            Ok(VolunteerTask::AnimalRehabilitation)
        );
    }

    #[test]
    fn unknown_variant_reports_kind_and_value() {
        let err = "Antarctica".parse::<Continent>().unwrap_err();
        assert_eq!(err.to_string(), "unknown continent 'Antarctica'");
    }

    #[test]
    fn serializes_to_display_name() {
        let json = serde_json::to_string(&Continent::SouthAmerica).expect("serialize");
        assert_eq!(json, "\"South America\"");
        let parsed: WildlifeType = serde_json::from_str("\"Marine Life\"").expect("parse");
        assert_eq!(parsed, WildlifeType::MarineLife);
    }

    #[test]
    fn all_lists_every_variant_once() {
        assert_eq!(Continent::ALL.len(), 6);
        assert_eq!(WildlifeType::ALL.len(), 6);
        assert_eq!(VolunteerTask::ALL.len(), 6);
    }

    #[test]
    fn view_mode_defaults_to_grid() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!("LIST".parse::<ViewMode>(), Ok(ViewMode::List));
        assert!("table".parse::<ViewMode>().is_err());
    }
}
