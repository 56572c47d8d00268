use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Key of the roster map. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActivityName(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("activity name must not be blank")]
pub struct BlankActivityName;

impl ActivityName {
    pub fn new(name: impl Into<String>) -> Result<Self, BlankActivityName> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BlankActivityName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ActivityName {
    type Error = BlankActivityName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityName> for String {
    fn from(name: ActivityName) -> Self {
        name.0
    }
}

// Lets the store look up `&str` path params without allocating a key.
impl Borrow<str> for ActivityName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One extracurricular activity and its roster, in signup order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        self.participants = emails.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        assert!(ActivityName::new("").is_err());
        assert!(ActivityName::new("   ").is_err());
        assert_eq!(ActivityName::new("Chess Club").unwrap().as_str(), "Chess Club");
    }

    #[test]
    fn name_deserialization_validates() {
        let ok: Result<ActivityName, _> = serde_json::from_str("\"Art Club\"");
        assert!(ok.is_ok());
        let blank: Result<ActivityName, _> = serde_json::from_str("\" \"");
        assert!(blank.is_err());
    }

    #[test]
    fn capacity_helpers() {
        let a = Activity::new("d", "s", 2).with_participants(&["a@x.edu"]);
        assert!(!a.is_full());
        assert_eq!(a.spots_left(), 1);
        assert!(a.has_participant("a@x.edu"));

        let zero = Activity::new("d", "s", 0);
        assert!(zero.is_full());
        assert_eq!(zero.spots_left(), 0);
    }
}
