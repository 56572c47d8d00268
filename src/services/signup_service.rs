use tracing::{info, warn};

use crate::database::activities_repo::{ActivityMap, RosterStore};
use crate::error::RosterError;
use crate::models::MessageResponse;

pub fn list_activities(store: &RosterStore) -> ActivityMap {
    store.list()
}

/// Emails are opaque: only a missing parameter is rejected.
pub fn require_email(raw: Option<&str>) -> Result<&str, RosterError> {
    raw.ok_or(RosterError::MissingEmail)
}

pub fn sign_up(
    store: &RosterStore,
    activity: &str,
    email: Option<&str>,
) -> Result<MessageResponse, RosterError> {
    let email = require_email(email)?;
    match store.signup(activity, email) {
        Ok(spots_left) => {
            info!(activity, email, spots_left, "Signed up participant");
            Ok(MessageResponse::new(format!(
                "Signed up {} for {}",
                email, activity
            )))
        }
        Err(e) => {
            warn!(activity, email, error = %e, "Signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    store: &RosterStore,
    activity: &str,
    email: Option<&str>,
) -> Result<MessageResponse, RosterError> {
    let email = require_email(email)?;
    match store.unregister(activity, email) {
        Ok(spots_left) => {
            info!(activity, email, spots_left, "Unregistered participant");
            Ok(MessageResponse::new(format!(
                "Unregistered {} from {}",
                email, activity
            )))
        }
        Err(e) => {
            warn!(activity, email, error = %e, "Unregister rejected");
            Err(e)
        }
    }
}
