//! Widget record definitions.
//!
//! Each entity type is a plain struct trio: the stored `*Record`, the insert
//! `*Draft` (what a POST body must parse as), and the `*Patch` (what a PATCH
//! body may parse as, every field optional). serde is the shape validator:
//! a body that fails to deserialize into the draft/patch is an invalid
//! request. Unknown keys are ignored; wire names are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::store::Record;

/// Distinguishes "field absent" (`None`, leave untouched) from "field set to
/// null" (`Some(None)`) in patch bodies. A bare `Option<Option<T>>` would
/// collapse an explicit null into absence.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// For patch fields backed by required columns: the field may be omitted or
/// replaced, but an explicit null is a shape error. Deserializing `T` itself
/// (not `Option<T>`) is what makes null fail.
fn non_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_watch_status() -> String {
    "watch_later".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

// ---------------------------------------------------------------------------
// users

/// The account record. Login is email-only; a user is created lazily the
/// first time an unknown email signs in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub profile_picture: Option<String>,
    pub daily_quote: Option<String>,
    pub portfolio_link: Option<String>,
    pub theme: String,
    pub focus_mode_enabled: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub daily_quote: Option<String>,
    #[serde(default)]
    pub portfolio_link: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub focus_mode_enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub profile_picture: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub daily_quote: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub portfolio_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub theme: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub focus_mode_enabled: Option<bool>,
}

impl Record for UserRecord {
    type Draft = UserDraft;
    type Patch = UserPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            email: draft.email,
            name: draft.name,
            profile_picture: draft.profile_picture,
            daily_quote: draft.daily_quote,
            portfolio_link: draft.portfolio_link,
            theme: draft.theme,
            focus_mode_enabled: draft.focus_mode_enabled,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    // A user owns itself; the users table is never listed by owner.
    fn owner_id(&self) -> u64 {
        self.id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.email {
            self.email = value;
        }
        if let Some(value) = patch.name {
            self.name = value;
        }
        if let Some(value) = patch.profile_picture {
            self.profile_picture = value;
        }
        if let Some(value) = patch.daily_quote {
            self.daily_quote = value;
        }
        if let Some(value) = patch.portfolio_link {
            self.portfolio_link = value;
        }
        if let Some(value) = patch.theme {
            self.theme = value;
        }
        if let Some(value) = patch.focus_mode_enabled {
            self.focus_mode_enabled = value;
        }
    }
}

// ---------------------------------------------------------------------------
// study resources

/// A saved study item: a YouTube link, a note, or a plain resource URL,
/// optionally filed into a folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyResourceRecord {
    pub id: u64,
    pub user_id: u64,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub title: String,
    pub content: Option<String>,
    pub thumbnail: Option<String>,
    pub folder: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyResourceDraft {
    pub user_id: u64,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub folder: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyResourcePatch {
    #[serde(rename = "type", default, deserialize_with = "non_null")]
    pub resource_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub thumbnail: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub folder: Option<Option<String>>,
}

impl Record for StudyResourceRecord {
    type Draft = StudyResourceDraft;
    type Patch = StudyResourcePatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            resource_type: draft.resource_type,
            title: draft.title,
            content: draft.content,
            thumbnail: draft.thumbnail,
            folder: draft.folder,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.resource_type {
            self.resource_type = value;
        }
        if let Some(value) = patch.title {
            self.title = value;
        }
        if let Some(value) = patch.content {
            self.content = value;
        }
        if let Some(value) = patch.thumbnail {
            self.thumbnail = value;
        }
        if let Some(value) = patch.folder {
            self.folder = value;
        }
    }
}

// ---------------------------------------------------------------------------
// game scores

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScoreRecord {
    pub id: u64,
    pub user_id: u64,
    pub game_name: String,
    pub score: i64,
    pub stars: i64,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScoreDraft {
    pub user_id: u64,
    pub game_name: String,
    pub score: i64,
    #[serde(default)]
    pub stars: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameScorePatch {
    #[serde(default, deserialize_with = "non_null")]
    pub game_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub score: Option<i64>,
    #[serde(default, deserialize_with = "non_null")]
    pub stars: Option<i64>,
}

impl Record for GameScoreRecord {
    type Draft = GameScoreDraft;
    type Patch = GameScorePatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            game_name: draft.game_name,
            score: draft.score,
            stars: draft.stars,
            completed_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.game_name {
            self.game_name = value;
        }
        if let Some(value) = patch.score {
            self.score = value;
        }
        if let Some(value) = patch.stars {
            self.stars = value;
        }
    }
}

// ---------------------------------------------------------------------------
// music playlists

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRecord {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub url: String,
    pub platform: String,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDraft {
    pub user_id: u64,
    pub name: String,
    pub url: String,
    pub platform: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub thumbnail: Option<Option<String>>,
}

impl Record for PlaylistRecord {
    type Draft = PlaylistDraft;
    type Patch = PlaylistPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            name: draft.name,
            url: draft.url,
            platform: draft.platform,
            thumbnail: draft.thumbnail,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.name {
            self.name = value;
        }
        if let Some(value) = patch.url {
            self.url = value;
        }
        if let Some(value) = patch.platform {
            self.platform = value;
        }
        if let Some(value) = patch.thumbnail {
            self.thumbnail = value;
        }
    }
}

// ---------------------------------------------------------------------------
// gym exercises

/// One exercise slot in a workout plan; `status` tracks completed/skipped/
/// pending and is the field the UI toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymExerciseRecord {
    pub id: u64,
    pub user_id: u64,
    pub muscle_group: String,
    pub exercise_name: String,
    pub status: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymExerciseDraft {
    pub user_id: u64,
    pub muscle_group: String,
    pub exercise_name: String,
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymExercisePatch {
    #[serde(default, deserialize_with = "non_null")]
    pub muscle_group: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub exercise_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub status: Option<String>,
}

impl Record for GymExerciseRecord {
    type Draft = GymExerciseDraft;
    type Patch = GymExercisePatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            muscle_group: draft.muscle_group,
            exercise_name: draft.exercise_name,
            status: draft.status,
            date: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.muscle_group {
            self.muscle_group = value;
        }
        if let Some(value) = patch.exercise_name {
            self.exercise_name = value;
        }
        if let Some(value) = patch.status {
            self.status = value;
        }
    }
}

// ---------------------------------------------------------------------------
// health entries

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntryRecord {
    pub id: u64,
    pub user_id: u64,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub content: String,
    pub rating: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntryDraft {
    pub user_id: u64,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub content: String,
    #[serde(default)]
    pub rating: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntryPatch {
    #[serde(rename = "type", default, deserialize_with = "non_null")]
    pub entry_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub rating: Option<Option<String>>,
}

impl Record for HealthEntryRecord {
    type Draft = HealthEntryDraft;
    type Patch = HealthEntryPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            entry_type: draft.entry_type,
            content: draft.content,
            rating: draft.rating,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.entry_type {
            self.entry_type = value;
        }
        if let Some(value) = patch.content {
            self.content = value;
        }
        if let Some(value) = patch.rating {
            self.rating = value;
        }
    }
}

// ---------------------------------------------------------------------------
// entertainment items

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntertainmentItemRecord {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub platform: String,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntertainmentItemDraft {
    pub user_id: u64,
    pub title: String,
    pub platform: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default = "default_watch_status")]
    pub status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntertainmentItemPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub thumbnail: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub status: Option<String>,
}

impl Record for EntertainmentItemRecord {
    type Draft = EntertainmentItemDraft;
    type Patch = EntertainmentItemPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            title: draft.title,
            platform: draft.platform,
            url: draft.url,
            thumbnail: draft.thumbnail,
            status: draft.status,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.title {
            self.title = value;
        }
        if let Some(value) = patch.platform {
            self.platform = value;
        }
        if let Some(value) = patch.url {
            self.url = value;
        }
        if let Some(value) = patch.thumbnail {
            self.thumbnail = value;
        }
        if let Some(value) = patch.status {
            self.status = value;
        }
    }
}

// ---------------------------------------------------------------------------
// wishlist items

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemRecord {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub price: Option<String>,
    pub platform: String,
    pub url: String,
    pub thumbnail: Option<String>,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemDraft {
    pub user_id: u64,
    pub title: String,
    #[serde(default)]
    pub price: Option<String>,
    pub platform: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub price: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub thumbnail: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub priority: Option<String>,
}

impl Record for WishlistItemRecord {
    type Draft = WishlistItemDraft;
    type Patch = WishlistItemPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            title: draft.title,
            price: draft.price,
            platform: draft.platform,
            url: draft.url,
            thumbnail: draft.thumbnail,
            priority: draft.priority,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.title {
            self.title = value;
        }
        if let Some(value) = patch.price {
            self.price = value;
        }
        if let Some(value) = patch.platform {
            self.platform = value;
        }
        if let Some(value) = patch.url {
            self.url = value;
        }
        if let Some(value) = patch.thumbnail {
            self.thumbnail = value;
        }
        if let Some(value) = patch.priority {
            self.priority = value;
        }
    }
}

// ---------------------------------------------------------------------------
// finance entries

/// Income, expense, or bill. Amounts are whole currency units, matching the
/// integer column in the source data model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntryRecord {
    pub id: u64,
    pub user_id: u64,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub amount: i64,
    pub description: String,
    pub category: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntryDraft {
    pub user_id: u64,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub amount: i64,
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntryPatch {
    #[serde(rename = "type", default, deserialize_with = "non_null")]
    pub entry_type: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl Record for FinanceEntryRecord {
    type Draft = FinanceEntryDraft;
    type Patch = FinanceEntryPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            entry_type: draft.entry_type,
            amount: draft.amount,
            description: draft.description,
            category: draft.category,
            due_date: draft.due_date,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.entry_type {
            self.entry_type = value;
        }
        if let Some(value) = patch.amount {
            self.amount = value;
        }
        if let Some(value) = patch.description {
            self.description = value;
        }
        if let Some(value) = patch.category {
            self.category = value;
        }
        if let Some(value) = patch.due_date {
            self.due_date = value;
        }
    }
}

// ---------------------------------------------------------------------------
// documents

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: Option<i64>,
    pub file_path: String,
    pub tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    pub user_id: u64,
    pub title: String,
    pub file_name: String,
    pub file_type: String,
    #[serde(default)]
    pub file_size: Option<i64>,
    pub file_path: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub file_type: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub file_size: Option<Option<i64>>,
    #[serde(default, deserialize_with = "non_null")]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub tags: Option<Option<Vec<String>>>,
}

impl Record for DocumentRecord {
    type Draft = DocumentDraft;
    type Patch = DocumentPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            title: draft.title,
            file_name: draft.file_name,
            file_type: draft.file_type,
            file_size: draft.file_size,
            file_path: draft.file_path,
            tags: draft.tags,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.title {
            self.title = value;
        }
        if let Some(value) = patch.file_name {
            self.file_name = value;
        }
        if let Some(value) = patch.file_type {
            self.file_type = value;
        }
        if let Some(value) = patch.file_size {
            self.file_size = value;
        }
        if let Some(value) = patch.file_path {
            self.file_path = value;
        }
        if let Some(value) = patch.tags {
            self.tags = value;
        }
    }
}

// ---------------------------------------------------------------------------
// AI tools

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiToolRecord {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiToolDraft {
    pub user_id: u64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiToolPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

impl Record for AiToolRecord {
    type Draft = AiToolDraft;
    type Patch = AiToolPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            name: draft.name,
            url: draft.url,
            icon: draft.icon,
            description: draft.description,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.name {
            self.name = value;
        }
        if let Some(value) = patch.url {
            self.url = value;
        }
        if let Some(value) = patch.icon {
            self.icon = value;
        }
        if let Some(value) = patch.description {
            self.description = value;
        }
    }
}

// ---------------------------------------------------------------------------
// shortcuts

/// A pinned-link dock entry; `order` drives dock position, `is_pinned`
/// controls visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutRecord {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
    pub is_pinned: bool,
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutDraft {
    pub user_id: u64,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    pub is_pinned: Option<bool>,
    #[serde(default, deserialize_with = "non_null")]
    pub order: Option<i64>,
}

impl Record for ShortcutRecord {
    type Draft = ShortcutDraft;
    type Patch = ShortcutPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            name: draft.name,
            url: draft.url,
            icon: draft.icon,
            is_pinned: draft.is_pinned,
            order: draft.order,
            created_at: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.name {
            self.name = value;
        }
        if let Some(value) = patch.url {
            self.url = value;
        }
        if let Some(value) = patch.icon {
            self.icon = value;
        }
        if let Some(value) = patch.is_pinned {
            self.is_pinned = value;
        }
        if let Some(value) = patch.order {
            self.order = value;
        }
    }
}

// ---------------------------------------------------------------------------
// performance metrics

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetricRecord {
    pub id: u64,
    pub user_id: u64,
    pub section: String,
    pub metric: String,
    pub value: i64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetricDraft {
    pub user_id: u64,
    pub section: String,
    pub metric: String,
    pub value: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetricPatch {
    #[serde(default, deserialize_with = "non_null")]
    pub section: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub metric: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub value: Option<i64>,
}

impl Record for PerformanceMetricRecord {
    type Draft = PerformanceMetricDraft;
    type Patch = PerformanceMetricPatch;

    fn compose(id: u64, stamped_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            section: draft.section,
            metric: draft.metric,
            value: draft.value,
            date: stamped_at,
        }
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> u64 {
        self.user_id
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(value) = patch.section {
            self.section = value;
        }
        if let Some(value) = patch.metric {
            self.metric = value;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_rejects_missing_required_field() {
        let body = serde_json::json!({"userId": 7, "name": "Focus Mix", "url": "https://x"});
        assert!(serde_json::from_value::<PlaylistDraft>(body).is_err());
    }

    #[test]
    fn draft_applies_declared_defaults() {
        let body = serde_json::json!({"userId": 7, "email": "a@b.c", "name": ""});
        let draft: UserDraft = serde_json::from_value(body).expect("valid user draft");
        assert_eq!(draft.theme, "light");
        assert!(!draft.focus_mode_enabled);

        let body = serde_json::json!({"userId": 7, "title": "Dune", "platform": "netflix"});
        let draft: EntertainmentItemDraft =
            serde_json::from_value(body).expect("valid entertainment draft");
        assert_eq!(draft.status, "watch_later");
    }

    #[test]
    fn draft_ignores_unknown_keys() {
        let body = serde_json::json!({
            "userId": 7,
            "name": "Focus Mix",
            "url": "https://x",
            "platform": "spotify",
            "bogus": true
        });
        assert!(serde_json::from_value::<PlaylistDraft>(body).is_ok());
    }

    #[test]
    fn patch_distinguishes_absent_from_null() {
        let body = serde_json::json!({"thumbnail": null});
        let patch: PlaylistPatch = serde_json::from_value(body).expect("valid patch");
        assert_eq!(patch.thumbnail, Some(None));
        assert!(patch.name.is_none());

        let patch: PlaylistPatch =
            serde_json::from_value(serde_json::json!({})).expect("empty patch");
        assert!(patch.thumbnail.is_none());
    }

    #[test]
    fn patch_rejects_null_for_required_columns() {
        // Nullable columns take null (cleared above); required ones must not.
        assert!(serde_json::from_value::<GymExercisePatch>(serde_json::json!({"status": null}))
            .is_err());
        assert!(serde_json::from_value::<PlaylistPatch>(serde_json::json!({"name": null}))
            .is_err());
        assert!(serde_json::from_value::<GameScorePatch>(serde_json::json!({"score": null}))
            .is_err());
        assert!(serde_json::from_value::<UserPatch>(serde_json::json!({"email": null})).is_err());
    }

    #[test]
    fn record_serializes_with_wire_names() {
        let record = StudyResourceRecord {
            id: 2,
            user_id: 7,
            resource_type: "youtube".to_string(),
            title: "lifetimes".to_string(),
            content: Some("https://youtu.be/abc".to_string()),
            thumbnail: None,
            folder: None,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(value["type"], "youtube");
        assert_eq!(value["userId"], 7);
        assert!(value.get("createdAt").is_some());
    }
}
