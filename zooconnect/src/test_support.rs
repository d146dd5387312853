//! Test-only helpers for constructing catalog records.

use std::path::PathBuf;

use crate::core::types::{Continent, VolunteerTask, WildlifeType};
use crate::experience::{Coordinates, Experience, Location, Pricing, WeekRange};

/// Create a deterministic experience with one task and two requirements.
pub fn experience(
    id: &str,
    continent: Continent,
    wildlife: &[WildlifeType],
    min_weeks: u32,
    max_weeks: Option<u32>,
) -> Experience {
    Experience {
        id: id.to_string(),
        title: format!("{} title", id),
        location: Location {
            city: format!("{} city", id),
            country: format!("{} country", id),
            continent,
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        },
        images: vec![format!("/assets/{}.jpg", id)],
        description: format!("{} description", id),
        overview: format!("{} overview", id),
        wildlife_types: wildlife.to_vec(),
        volunteer_tasks: vec![VolunteerTask::HabitatMaintenance],
        ethical_considerations: format!("{} ethics", id),
        requirements: vec!["Minimum age 18".to_string(), "Basic fitness".to_string()],
        pricing: Pricing {
            amount: 500.0,
            currency: "USD".to_string(),
            period: "week".to_string(),
        },
        duration: WeekRange {
            min_weeks,
            max_weeks,
        },
        impact: format!("{} impact", id),
        rating: 4.5,
        reviews_count: 10,
        featured: None,
    }
}

/// Replace requirements with `count` numbered entries.
pub fn with_requirements(mut experience: Experience, count: usize) -> Experience {
    experience.requirements = (1..=count).map(|n| format!("requirement {}", n)).collect();
    experience
}

/// Replace volunteer tasks.
pub fn with_tasks(mut experience: Experience, tasks: &[VolunteerTask]) -> Experience {
    experience.volunteer_tasks = tasks.to_vec();
    experience
}

/// Write `experiences` as a catalog file inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_catalog(experiences: &[Experience]) -> anyhow::Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("experiences.json");
    std::fs::write(&path, serde_json::to_string_pretty(experiences)?)?;
    Ok((dir, path))
}
