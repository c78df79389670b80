use std::sync::Arc;

use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::database::seed;
use crate::error::ActivityError;
use crate::models::Activity;

/// In-memory roster store shared by all handlers.
///
/// Cloning is cheap and every clone sees the same map. Roster checks and
/// the mutation that follows run under one write lock.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<IndexMap<String, Activity>>>,
}

impl ActivityStore {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn list(&self) -> IndexMap<String, Activity> {
        self.inner.read().await.clone()
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().await.get(name).cloned()
    }

    pub async fn add_participant(&self, name: &str, email: &str) -> Result<(), ActivityError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(ActivityError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub async fn remove_participant(&self, name: &str, email: &str) -> Result<(), ActivityError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(ActivityError::ActivityNotFound)?;

        let Some(idx) = activity.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::NotRegistered);
        };

        activity.participants.remove(idx);
        Ok(())
    }
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_then_remove_restores_roster() {
        let store = ActivityStore::seeded();
        let before = store.get("Chess Club").await.unwrap().participants;

        store
            .add_participant("Chess Club", "new@mergington.edu")
            .await
            .unwrap();
        let during = store.get("Chess Club").await.unwrap().participants;
        assert_eq!(during.len(), before.len() + 1);
        assert_eq!(during.last().map(String::as_str), Some("new@mergington.edu"));

        store
            .remove_participant("Chess Club", "new@mergington.edu")
            .await
            .unwrap();
        assert_eq!(store.get("Chess Club").await.unwrap().participants, before);
    }

    #[tokio::test]
    async fn duplicate_add_is_rejected_without_mutation() {
        let store = ActivityStore::seeded();
        let err = store
            .add_participant("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::AlreadySignedUp);

        let roster = store.get("Chess Club").await.unwrap().participants;
        assert_eq!(
            roster
                .iter()
                .filter(|p| p.as_str() == "michael@mergington.edu")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn unknown_activity_is_not_found() {
        let store = ActivityStore::seeded();
        assert_eq!(
            store.add_participant("Knitting", "a@b.c").await,
            Err(ActivityError::ActivityNotFound)
        );
        assert_eq!(
            store.remove_participant("Knitting", "a@b.c").await,
            Err(ActivityError::ActivityNotFound)
        );
    }

    #[tokio::test]
    async fn removing_absent_participant_is_not_registered() {
        let store = ActivityStore::seeded();
        assert_eq!(
            store
                .remove_participant("Debate Club", "ghost@mergington.edu")
                .await,
            Err(ActivityError::NotRegistered)
        );
    }

    #[tokio::test]
    async fn separate_stores_do_not_share_state() {
        let a = ActivityStore::seeded();
        let b = ActivityStore::seeded();
        a.add_participant("Gym Class", "solo@mergington.edu")
            .await
            .unwrap();

        assert!(a
            .get("Gym Class")
            .await
            .unwrap()
            .has_participant("solo@mergington.edu"));
        assert!(!b
            .get("Gym Class")
            .await
            .unwrap()
            .has_participant("solo@mergington.edu"));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let a = ActivityStore::seeded();
        let b = a.clone();
        b.add_participant("Tennis Club", "shared@mergington.edu")
            .await
            .unwrap();
        assert!(a
            .get("Tennis Club")
            .await
            .unwrap()
            .has_participant("shared@mergington.edu"));
    }
}
