use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::database::activities_repo::ActivityMap;
use crate::error::SeedError;
use crate::models::{Activity, ActivityName};

/// The activities offered when no seed file is configured.
pub fn default_activities() -> Result<ActivityMap, SeedError> {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice and compete in interscholastic basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(&["alex@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Develop tennis skills and play friendly matches",
                "Wednesdays, 3:30 PM - 5:00 PM",
                10,
            )
            .with_participants(&["lucas@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(&["ava@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct and stage the school's seasonal productions",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            )
            .with_participants(&["ethan@mergington.edu", "isabella@mergington.edu"]),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Train for regional and national mathematics competitions",
                "Wednesdays, 3:30 PM - 4:30 PM",
                12,
            )
            .with_participants(&["noah@mergington.edu"]),
        ),
        (
            "Science Club",
            Activity::new(
                "Hands-on experiments and science fair preparation",
                "Fridays, 2:00 PM - 3:30 PM",
                16,
            ),
        ),
    ];

    from_entries(
        entries
            .into_iter()
            .map(|(name, activity)| (name.to_string(), activity)),
    )
}

/// Builds a roster map, rejecting blank or repeated names and rosters that
/// break the capacity or uniqueness invariants.
pub fn from_entries(
    entries: impl IntoIterator<Item = (String, Activity)>,
) -> Result<ActivityMap, SeedError> {
    let mut map = ActivityMap::new();
    for (name, activity) in entries {
        let key = ActivityName::new(name.clone()).map_err(|_| SeedError::BlankName)?;
        if map.contains_key(&key) {
            return Err(SeedError::DuplicateActivity(name));
        }
        map.insert(key, activity);
    }
    validate(&map)?;
    Ok(map)
}

/// Loads the activity set from a JSON file shaped like `GET /activities`.
pub fn load_from_file(path: &Path) -> Result<ActivityMap, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let map: ActivityMap = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&map)?;
    info!(path = %path.display(), activities = map.len(), "Loaded activity seed file");
    Ok(map)
}

pub fn validate(map: &ActivityMap) -> Result<(), SeedError> {
    for (name, activity) in map {
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.to_string(),
                    email: email.clone(),
                });
            }
        }
        if activity.participants.len() > activity.max_participants {
            return Err(SeedError::OverCapacity {
                activity: name.to_string(),
                count: activity.participants.len(),
                max: activity.max_participants,
            });
        }
    }
    Ok(())
}
