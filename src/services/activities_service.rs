use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::database::ActivityStore;
use crate::error::ActivityError;
use crate::models::Activity;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageView {
    pub message: String,
}

pub async fn list_activities(store: &ActivityStore) -> IndexMap<String, Activity> {
    store.list().await
}

pub async fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, ActivityError> {
    if let Err(e) = store.add_participant(activity_name, email).await {
        debug!(activity = %activity_name, email = %email, "signup rejected: {}", e);
        return Err(e);
    }

    info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(MessageView {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, ActivityError> {
    if let Err(e) = store.remove_participant(activity_name, email).await {
        debug!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
        return Err(e);
    }

    info!(activity = %activity_name, email = %email, "participant unregistered");
    Ok(MessageView {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}
