use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::warn;

use crate::database::seed;
use crate::models::{Activity, RosterSnapshot};

struct ActivitySlot {
    name: String,
    activity: Mutex<Activity>,
}

/// In-memory roster owned by the application state.
///
/// The set of activity names is fixed at construction. Every record sits
/// behind its own mutex, so mutations on one activity are serialized while
/// different activities never contend.
pub struct RosterStore {
    slots: Vec<ActivitySlot>,
    index: HashMap<String, usize>,
}

impl RosterStore {
    pub fn new(activities: Vec<(String, Activity)>) -> Self {
        let mut slots = Vec::with_capacity(activities.len());
        let mut index = HashMap::with_capacity(activities.len());

        for (name, activity) in activities {
            if index.contains_key(&name) {
                warn!(activity = %name, "Duplicate activity in seed data ignored");
                continue;
            }
            index.insert(name.clone(), slots.len());
            slots.push(ActivitySlot {
                name,
                activity: Mutex::new(activity),
            });
        }

        Self { slots, index }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub async fn snapshot(&self) -> RosterSnapshot {
        let mut activities = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            let activity = slot.activity.lock().await.clone();
            activities.push((slot.name.clone(), activity));
        }
        RosterSnapshot { activities }
    }

    /// Runs `f` against the named activity while holding its lock.
    /// Returns `None` when no such activity exists.
    pub async fn with_activity<T, F>(&self, name: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut Activity) -> T,
    {
        let slot = self.slot(name)?;
        let mut activity = slot.activity.lock().await;
        Some(f(&mut activity))
    }

    fn slot(&self, name: &str) -> Option<&ActivitySlot> {
        self.index.get(name).map(|&i| &self.slots[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn get(store: &RosterStore, name: &str) -> Option<Activity> {
        store.with_activity(name, |a| a.clone()).await
    }

    #[tokio::test]
    async fn seeded_store_keeps_seed_order() {
        let store = RosterStore::seeded();
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.activities.len(), 9);

        let names: Vec<&str> = snapshot.activities.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names.first(), Some(&"Chess Club"));
        assert_eq!(names.last(), Some(&"Science Olympiad"));
    }

    #[tokio::test]
    async fn duplicate_seed_names_keep_first_record() {
        let store = RosterStore::new(vec![
            ("Chess Club".to_string(), Activity::new("first", "s", 1, &[])),
            ("Chess Club".to_string(), Activity::new("second", "s", 1, &[])),
        ]);

        assert_eq!(store.snapshot().await.activities.len(), 1);
        let chess = get(&store, "Chess Club").await.unwrap();
        assert_eq!(chess.description, "first");
    }

    #[tokio::test]
    async fn with_activity_mutates_in_place() {
        let store = RosterStore::seeded();
        let len = store
            .with_activity("Tennis Club", |a| {
                a.participants.push("new@mergington.edu".to_string());
                a.participants.len()
            })
            .await;

        assert_eq!(len, Some(2));
        let tennis = get(&store, "Tennis Club").await.unwrap();
        assert!(tennis.has_participant("new@mergington.edu"));
    }

    #[tokio::test]
    async fn unknown_activity_is_none() {
        let store = RosterStore::seeded();
        assert!(get(&store, "Underwater Basket Weaving").await.is_none());
    }

    #[tokio::test]
    async fn names_are_case_sensitive() {
        let store = RosterStore::seeded();
        assert!(get(&store, "Chess Club").await.is_some());
        assert!(get(&store, "chess club").await.is_none());
    }
}
