use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::schema::{
    AiToolRecord, DocumentRecord, EntertainmentItemRecord, FinanceEntryRecord, GameScoreRecord,
    GymExerciseRecord, HealthEntryRecord, PerformanceMetricRecord, PlaylistRecord,
    ShortcutRecord, StudyResourceRecord, UserRecord, WishlistItemRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
}

/// A storable widget record. `Draft` is the insert payload (everything but
/// the id and the store-stamped timestamp); `Patch` carries only non-identity
/// fields, so `id` and `owner_id` cannot change after creation.
pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send;
    type Patch: Send;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self;
    fn id(&self) -> u64;
    fn owner_id(&self) -> u64;
    fn apply(&mut self, patch: Self::Patch);
}

/// One entity type's table. Each table takes its own write lock, while ids
/// come from a counter shared across every table in the store, so two
/// concurrent inserts can never observe the same id and a completed write is
/// visible to every subsequent call on that table.
#[derive(Clone)]
pub struct Table<T> {
    next_id: Arc<AtomicU64>,
    rows: Arc<RwLock<HashMap<u64, T>>>,
}

impl<T: Record> Table<T> {
    fn new(next_id: Arc<AtomicU64>) -> Self {
        Self {
            next_id,
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Allocates a fresh id, stamps the creation timestamp, and stores the
    /// composed record. Shape validation is the caller's responsibility;
    /// insertion itself cannot fail.
    pub async fn insert(&self, draft: T::Draft) -> T {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = T::compose(id, Utc::now(), draft);
        let mut rows = self.rows.write().await;
        rows.insert(id, record.clone());
        record
    }

    /// All records owned by `owner_id`, in insertion order (ascending id —
    /// ids are monotonic). Unknown owners yield an empty vec.
    pub async fn list_by_owner(&self, owner_id: u64) -> Vec<T> {
        let rows = self.rows.read().await;
        let mut matched: Vec<T> = rows
            .values()
            .filter(|row| row.owner_id() == owner_id)
            .cloned()
            .collect();
        matched.sort_by_key(Record::id);
        matched
    }

    pub async fn get(&self, id: u64) -> Option<T> {
        let rows = self.rows.read().await;
        rows.get(&id).cloned()
    }

    /// First record matching `predicate`, scanning in id order so repeated
    /// lookups are deterministic.
    pub async fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let rows = self.rows.read().await;
        let mut matched: Vec<&T> = rows.values().filter(|row| predicate(row)).collect();
        matched.sort_by_key(|row| row.id());
        matched.first().map(|row| (*row).clone())
    }

    /// Shallow-merges `patch` onto the stored record. Missing ids are a hard
    /// stop — the store never creates a record on update-miss.
    pub async fn update(&self, id: u64, patch: T::Patch) -> Result<T, StoreError> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&id).ok_or(StoreError::NotFound)?;
        row.apply(patch);
        Ok(row.clone())
    }

    /// Removes the record if present. Deleting a missing id is a no-op.
    pub async fn delete(&self, id: u64) {
        let mut rows = self.rows.write().await;
        rows.remove(&id);
    }
}

/// The in-memory backing for every widget type. Constructed once at process
/// start and handed to the router by value; tests build fresh instances for
/// isolation. State lives only as long as the process.
#[derive(Clone)]
pub struct RecordStore {
    pub users: Table<UserRecord>,
    pub study_resources: Table<StudyResourceRecord>,
    pub game_scores: Table<GameScoreRecord>,
    pub playlists: Table<PlaylistRecord>,
    pub gym_exercises: Table<GymExerciseRecord>,
    pub health_entries: Table<HealthEntryRecord>,
    pub entertainment_items: Table<EntertainmentItemRecord>,
    pub wishlist_items: Table<WishlistItemRecord>,
    pub finance_entries: Table<FinanceEntryRecord>,
    pub documents: Table<DocumentRecord>,
    pub ai_tools: Table<AiToolRecord>,
    pub shortcuts: Table<ShortcutRecord>,
    pub performance_metrics: Table<PerformanceMetricRecord>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        // One counter across all tables: ids are unique store-wide, so no two
        // entity types ever hand out the same number.
        let next_id = Arc::new(AtomicU64::new(1));
        Self {
            users: Table::new(next_id.clone()),
            study_resources: Table::new(next_id.clone()),
            game_scores: Table::new(next_id.clone()),
            playlists: Table::new(next_id.clone()),
            gym_exercises: Table::new(next_id.clone()),
            health_entries: Table::new(next_id.clone()),
            entertainment_items: Table::new(next_id.clone()),
            wishlist_items: Table::new(next_id.clone()),
            finance_entries: Table::new(next_id.clone()),
            documents: Table::new(next_id.clone()),
            ai_tools: Table::new(next_id.clone()),
            shortcuts: Table::new(next_id.clone()),
            performance_metrics: Table::new(next_id),
        }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        GymExercisePatch, PlaylistDraft, PlaylistPatch, StudyResourceDraft, UserDraft,
    };

    fn playlist_draft(user_id: u64, name: &str) -> PlaylistDraft {
        PlaylistDraft {
            user_id,
            name: name.to_string(),
            url: "https://x".to_string(),
            platform: "spotify".to_string(),
            thumbnail: None,
        }
    }

    fn study_draft(user_id: u64) -> StudyResourceDraft {
        StudyResourceDraft {
            user_id,
            resource_type: "note".to_string(),
            title: "borrow checker notes".to_string(),
            content: None,
            thumbnail: None,
            folder: None,
        }
    }

    #[tokio::test]
    async fn ids_are_unique_across_mixed_entity_inserts() {
        let store = RecordStore::new();
        let mut seen = std::collections::HashSet::new();

        for index in 0..5 {
            let playlist = store
                .playlists
                .insert(playlist_draft(7, &format!("mix {index}")))
                .await;
            assert!(seen.insert(playlist.id));
            let resource = store.study_resources.insert(study_draft(7)).await;
            assert!(seen.insert(resource.id));
        }
    }

    #[tokio::test]
    async fn ids_are_strictly_increasing_in_assignment_order() {
        let store = RecordStore::new();
        let first = store.playlists.insert(playlist_draft(1, "a")).await;
        let second = store.study_resources.insert(study_draft(1)).await;
        let third = store.playlists.insert(playlist_draft(1, "b")).await;
        assert!(first.id < second.id);
        assert!(second.id < third.id);
    }

    #[tokio::test]
    async fn list_by_owner_never_leaks_other_owners() {
        let store = RecordStore::new();
        store.playlists.insert(playlist_draft(7, "mine")).await;
        store.playlists.insert(playlist_draft(8, "theirs")).await;

        let mine = store.playlists.list_by_owner(7).await;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "mine");

        let unknown = store.playlists.list_by_owner(999).await;
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn update_merges_only_provided_fields() {
        let store = RecordStore::new();
        let exercise = store
            .gym_exercises
            .insert(crate::schema::GymExerciseDraft {
                user_id: 3,
                muscle_group: "back".to_string(),
                exercise_name: "deadlift".to_string(),
                status: "pending".to_string(),
            })
            .await;

        let updated = store
            .gym_exercises
            .update(
                exercise.id,
                GymExercisePatch {
                    status: Some("completed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .expect("update existing exercise");

        assert_eq!(updated.id, exercise.id);
        assert_eq!(updated.user_id, 3);
        assert_eq!(updated.muscle_group, "back");
        assert_eq!(updated.exercise_name, "deadlift");
        assert_eq!(updated.status, "completed");
        assert_eq!(updated.date, exercise.date);
    }

    #[tokio::test]
    async fn update_miss_is_not_found_and_leaves_table_unchanged() {
        let store = RecordStore::new();
        let playlist = store.playlists.insert(playlist_draft(7, "keep")).await;

        let result = store
            .playlists
            .update(playlist.id + 100, PlaylistPatch::default())
            .await;
        assert!(matches!(result, Err(StoreError::NotFound)));

        let rows = store.playlists.list_by_owner(7).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "keep");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = RecordStore::new();
        let playlist = store.playlists.insert(playlist_draft(7, "gone")).await;

        store.playlists.delete(playlist.id).await;
        store.playlists.delete(playlist.id).await;

        assert!(store.playlists.get(playlist.id).await.is_none());
        assert!(store.playlists.list_by_owner(7).await.is_empty());
    }

    #[tokio::test]
    async fn insert_then_list_round_trip() {
        let store = RecordStore::new();
        let created = store.playlists.insert(playlist_draft(7, "Focus Mix")).await;

        let listed = store.playlists.list_by_owner(7).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].user_id, 7);
        assert_eq!(listed[0].name, "Focus Mix");
        assert_eq!(listed[0].created_at, created.created_at);

        store.playlists.delete(created.id).await;
        assert!(store.playlists.list_by_owner(7).await.is_empty());
    }

    #[tokio::test]
    async fn find_resolves_user_by_email() {
        let store = RecordStore::new();
        let user = store
            .users
            .insert(UserDraft {
                email: "ada@example.com".to_string(),
                name: "Ada".to_string(),
                profile_picture: None,
                daily_quote: None,
                portfolio_link: None,
                theme: "light".to_string(),
                focus_mode_enabled: false,
            })
            .await;

        let found = store
            .users
            .find(|row| row.email == "ada@example.com")
            .await
            .expect("user by email");
        assert_eq!(found.id, user.id);

        assert!(store.users.find(|row| row.email == "nobody").await.is_none());
    }
}
