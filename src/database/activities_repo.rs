use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::RosterError;
use crate::models::{Activity, ActivityName};

pub type ActivityMap = BTreeMap<ActivityName, Activity>;

/// In-memory rosters shared by all request handlers.
///
/// Cloning is cheap and yields a handle to the same store. Every mutation runs
/// its checks and its write under one write lock, so two concurrent signups
/// can never both see the last free spot.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    activities: Arc<RwLock<ActivityMap>>,
}

impl RosterStore {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn list(&self) -> ActivityMap {
        self.activities.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    /// Appends `email` to the roster and returns the spots left afterwards.
    ///
    /// Order of checks: unknown activity, then duplicate, then capacity. A
    /// student already on a full roster gets `AlreadySignedUp`, not `ActivityFull`.
    pub fn signup(&self, name: &str, email: &str) -> Result<usize, RosterError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(name)
            .ok_or(RosterError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(RosterError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(RosterError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(activity.spots_left())
    }

    /// Removes `email` from the roster and returns the spots left afterwards.
    pub fn unregister(&self, name: &str, email: &str) -> Result<usize, RosterError> {
        let mut activities = self.activities.write();
        let activity = activities
            .get_mut(name)
            .ok_or(RosterError::ActivityNotFound)?;

        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RosterError::ParticipantNotFound)?;

        activity.participants.remove(idx);
        Ok(activity.spots_left())
    }
}
