use serde::{Deserialize, Serialize};

use crate::core::types::{Continent, VolunteerTask, WildlifeType};

/// Upper end of the duration scale; open-ended programmes display as `12+`.
pub const OPEN_ENDED_WEEKS: u32 = 12;

/// One volunteer-programme listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: String,
    pub overview: String,
    pub wildlife_types: Vec<WildlifeType>,
    pub volunteer_tasks: Vec<VolunteerTask>,
    pub ethical_considerations: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub pricing: Pricing,
    pub duration: WeekRange,
    pub impact: String,
    pub rating: f64,
    pub reviews_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Experience {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// First image, used as the card and hero image.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub continent: Continent,
    pub coordinates: Coordinates,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pricing {
    pub amount: f64,
    pub currency: String,
    pub period: String,
}

/// Programme length in weeks. `max_weeks == None` means open-ended.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeekRange {
    pub min_weeks: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weeks: Option<u32>,
}

impl WeekRange {
    /// Render as `"2 - 6 weeks"`, or `"4 - 12+ weeks"` when open-ended.
    pub fn label(&self) -> String {
        match self.max_weeks {
            Some(max) => format!("{} - {} weeks", self.min_weeks, max),
            None => format!("{} - {}+ weeks", self.min_weeks, OPEN_ENDED_WEEKS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shows_open_ended_upper_bound() {
        let bounded = WeekRange {
            min_weeks: 2,
            max_weeks: Some(6),
        };
        let open = WeekRange {
            min_weeks: 4,
            max_weeks: None,
        };
        assert_eq!(bounded.label(), "2 - 6 weeks");
        assert_eq!(open.label(), "4 - 12+ weeks");
    }

    #[test]
    fn deserializes_camel_case_record() {
        let raw = r#"{
            "id": "x",
            "title": "T",
            "location": {
                "city": "Cusco",
                "country": "Peru",
                "continent": "South America",
                "coordinates": {"lat": -13.5, "lng": -71.9}
            },
            "description": "d",
            "overview": "o",
            "wildlifeTypes": ["Primates"],
            "volunteerTasks": ["Research"],
            "ethicalConsiderations": "e",
            "pricing": {"amount": 450, "currency": "USD", "period": "week"},
            "duration": {"minWeeks": 2},
            "impact": "i",
            "rating": 4.5,
            "reviewsCount": 12
        }"#;
        let exp: Experience = serde_json::from_str(raw).expect("parse");
        assert_eq!(exp.location.continent, Continent::SouthAmerica);
        assert_eq!(exp.duration.max_weeks, None);
        assert!(exp.images.is_empty());
        assert!(exp.requirements.is_empty());
        assert!(!exp.is_featured());
        assert_eq!(exp.cover_image(), None);
    }
}
