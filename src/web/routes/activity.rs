use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use crate::database::activities_repo::RosterStore;
use crate::error::RosterError;
use crate::models::MessageResponse;
use crate::services::signup_service;

/// Raw query pairs. Repeated keys are allowed and the last `email` wins.
type QueryPairs = Vec<(String, String)>;

fn last_email(pairs: QueryPairs) -> Option<String> {
    pairs
        .into_iter()
        .filter(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .last()
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(store): State<RosterStore>,
) -> Result<Json<MessageResponse>, RosterError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    let email = last_email(pairs);
    signup_service::sign_up(&store, &activity_name, email.as_deref()).map(Json)
}

pub async fn activity_unregister_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    State(store): State<RosterStore>,
) -> Result<Json<MessageResponse>, RosterError> {
    let Path(activity_name) = path?;
    let Query(pairs) = query?;
    let email = last_email(pairs);
    signup_service::unregister(&store, &activity_name, email.as_deref()).map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn last_email_wins() {
        let q = pairs(&[("email", "a@x.edu"), ("other", "z"), ("email", "b@x.edu")]);
        assert_eq!(last_email(q).as_deref(), Some("b@x.edu"));
    }

    #[test]
    fn missing_email_is_none() {
        assert_eq!(last_email(pairs(&[("mail", "a@x.edu")])), None);
        assert_eq!(last_email(pairs(&[("email", "")])).as_deref(), Some(""));
    }
}
