use indexmap::IndexMap;
use parking_lot::Mutex;
use thiserror::Error;

use crate::models::Activity;

pub type ActivityMap = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("activity {0:?} does not exist")]
    NotFound(String),
    #[error("{email} is already signed up for {activity:?}")]
    AlreadySignedUp { activity: String, email: String },
    #[error("{activity:?} is full ({max_participants} participants)")]
    Full {
        activity: String,
        max_participants: usize,
    },
}

/// In-memory catalog of activities. Membership is fixed at construction;
/// only participant lists change.
#[derive(Debug, Default)]
pub struct ActivityDirectory {
    activities: Mutex<ActivityMap>,
}

impl ActivityDirectory {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: Mutex::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn snapshot(&self) -> ActivityMap {
        self.activities.lock().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.lock().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.activities.lock().len()
    }

    /// Appends `email` to the named activity. Existence, duplicate and
    /// capacity checks run in that order under one lock; a rejected call
    /// leaves the directory untouched. Returns the new participant count.
    pub fn add_participant(&self, name: &str, email: &str) -> Result<usize, DirectoryError> {
        let mut activities = self.activities.lock();
        let Some(activity) = activities.get_mut(name) else {
            return Err(DirectoryError::NotFound(name.to_string()));
        };

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        if activity.is_full() {
            return Err(DirectoryError::Full {
                activity: name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        Ok(activity.participants.len())
    }
}

const SEED: &[(&str, &str, &str, usize, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Train and play competitive soccer matches against other schools",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice basketball skills and compete in the school league",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore painting, drawing and sculpture with other students",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct and produce plays and school performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

pub fn seed_activities() -> ActivityMap {
    SEED.iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(description, schedule, *max).with_participants(participants),
            )
        })
        .collect()
}
