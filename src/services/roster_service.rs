use tracing::{info, warn};

use crate::database::RosterStore;
use crate::error::{Result, RosterError};
use crate::models::RosterSnapshot;

pub async fn list_activities(store: &RosterStore) -> RosterSnapshot {
    store.snapshot().await
}

pub async fn enroll(store: &RosterStore, activity_name: &str, email: &str) -> Result<String> {
    let outcome = store
        .with_activity(activity_name, |activity| {
            if activity.has_participant(email) {
                return Err(RosterError::AlreadySignedUp);
            }
            activity.participants.push(email.to_string());
            Ok(activity.participants.len())
        })
        .await
        .unwrap_or(Err(RosterError::ActivityNotFound));

    match outcome {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "Student signed up");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "Signup rejected: {}", e);
            Err(e)
        }
    }
}

pub async fn withdraw(store: &RosterStore, activity_name: &str, email: &str) -> Result<String> {
    let outcome = store
        .with_activity(activity_name, |activity| {
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(RosterError::NotSignedUp);
            };
            // Vec::remove keeps the remaining order intact.
            activity.participants.remove(pos);
            Ok(activity.participants.len())
        })
        .await
        .unwrap_or(Err(RosterError::ActivityNotFound));

    match outcome {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "Student unregistered");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "Unregister rejected: {}", e);
            Err(e)
        }
    }
}
