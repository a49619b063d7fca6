use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Serialize;

use crate::error::RosterError;
use crate::services::roster_service;
use crate::web::AppState;

type ActivityPath = Result<Path<String>, PathRejection>;
type RawQuery = Result<Query<Vec<(String, String)>>, QueryRejection>;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// A repeated `email` resolves to its last occurrence.
fn email_param(pairs: Vec<(String, String)>) -> Result<String, RosterError> {
    pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == "email")
        .map(|(_, value)| value)
        .ok_or(RosterError::MissingEmail)
}

pub async fn signup_handler(
    State(state): State<Arc<AppState>>,
    path: ActivityPath,
    query: RawQuery,
) -> Result<Json<MessageResponse>, RosterError> {
    let Path(activity_name) = path?;
    let email = email_param(query?.0)?;
    let message = roster_service::enroll(&state.roster, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

pub async fn unregister_handler(
    State(state): State<Arc<AppState>>,
    path: ActivityPath,
    query: RawQuery,
) -> Result<Json<MessageResponse>, RosterError> {
    let Path(activity_name) = path?;
    let email = email_param(query?.0)?;
    let message = roster_service::withdraw(&state.roster, &activity_name, &email).await?;
    Ok(Json(MessageResponse { message }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn last_email_wins() {
        let email = email_param(pairs(&[("email", "a@x.edu"), ("email", "b@x.edu")])).unwrap();
        assert_eq!(email, "b@x.edu");
    }

    #[test]
    fn other_params_are_ignored() {
        let email = email_param(pairs(&[("email", "a@x.edu"), ("source", "web")])).unwrap();
        assert_eq!(email, "a@x.edu");
    }

    #[test]
    fn missing_email_is_rejected() {
        let err = email_param(pairs(&[("mail", "a@x.edu")])).unwrap_err();
        assert_eq!(err, RosterError::MissingEmail);
    }

    #[test]
    fn empty_email_is_accepted() {
        assert_eq!(email_param(pairs(&[("email", "")])).unwrap(), "");
    }
}
