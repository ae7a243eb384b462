//! Storage manager: four fixed JSON records over a key-value store.
//!
//! Never fails outward: when the store is missing or erroring, saves return
//! `false`, loads return `None`, clears are no-ops and the size is 0.
//!
//! Feedback appends are read-modify-write on one record, so they run under a
//! per-manager lock. The lock covers one process only.

use std::sync::Arc;

use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::models::storage::{FeedbackData, Improvement, StoredResume, UserPreferences, UserRating};
use crate::storage::store::KeyValueStore;

const PROBE_KEY: &str = "__test__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageKey {
    ResumeData,
    UserPreferences,
    DraftData,
    FeedbackData,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::ResumeData,
        StorageKey::UserPreferences,
        StorageKey::DraftData,
        StorageKey::FeedbackData,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::ResumeData => "resume_builder_data",
            StorageKey::UserPreferences => "resume_builder_preferences",
            StorageKey::DraftData => "resume_builder_draft",
            StorageKey::FeedbackData => "resume_builder_feedback",
        }
    }
}

#[derive(Clone)]
pub struct StorageManager {
    store: Option<Arc<dyn KeyValueStore>>,
    feedback_lock: Arc<Mutex<()>>,
}

impl StorageManager {
    pub fn new(store: Option<Arc<dyn KeyValueStore>>) -> Self {
        Self {
            store,
            feedback_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the store only if a set/remove probe succeeds.
    async fn available(&self) -> Option<&dyn KeyValueStore> {
        let store = self.store.as_deref()?;
        let probe = async {
            store.set(PROBE_KEY, PROBE_KEY).await?;
            store.remove(PROBE_KEY).await
        };
        match probe.await {
            Ok(()) => Some(store),
            Err(e) => {
                warn!("Storage unavailable: {e}");
                None
            }
        }
    }

    async fn save<T: Serialize>(&self, key: StorageKey, value: &T) -> bool {
        let Some(store) = self.available().await else {
            return false;
        };
        write(store, key, value).await
    }

    async fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let store = self.available().await?;

        match store.get(key.as_str()).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => Some(value),
                Err(e) => {
                    error!("Failed to load {}: {e}", key.as_str());
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                error!("Failed to load {}: {e}", key.as_str());
                None
            }
        }
    }

    /// Persists the resume, stamping `last_modified` with the current time.
    pub async fn save_resume(&self, mut data: StoredResume) -> bool {
        data.last_modified = Some(Utc::now());
        self.save(StorageKey::ResumeData, &data).await
    }

    pub async fn load_resume(&self) -> Option<StoredResume> {
        self.load(StorageKey::ResumeData).await
    }

    /// Drafts may be partial; every field of `StoredResume` defaults.
    pub async fn save_draft(&self, mut data: StoredResume) -> bool {
        data.last_modified = Some(Utc::now());
        self.save(StorageKey::DraftData, &data).await
    }

    pub async fn load_draft(&self) -> Option<StoredResume> {
        self.load(StorageKey::DraftData).await
    }

    pub async fn save_preferences(&self, preferences: &UserPreferences) -> bool {
        self.save(StorageKey::UserPreferences, preferences).await
    }

    pub async fn load_preferences(&self) -> Option<UserPreferences> {
        self.load(StorageKey::UserPreferences).await
    }

    pub async fn save_feedback(&self, feedback: &FeedbackData) -> bool {
        let _guard = self.feedback_lock.lock().await;
        self.save(StorageKey::FeedbackData, feedback).await
    }

    pub async fn load_feedback(&self) -> Option<FeedbackData> {
        self.load(StorageKey::FeedbackData).await
    }

    /// Appends a rating to the stored feedback.
    pub async fn record_rating(&self, rating: UserRating) -> bool {
        self.update_feedback(|feedback| feedback.user_ratings.push(rating))
            .await
    }

    /// Appends an improvement (applied or dismissed suggestion) to the stored feedback.
    pub async fn record_improvement(&self, improvement: Improvement) -> bool {
        self.update_feedback(|feedback| feedback.improvements.push(improvement))
            .await
    }

    /// Loads, modifies and saves the feedback record while holding the
    /// feedback lock. An unreadable existing record is left untouched.
    async fn update_feedback<F>(&self, modify: F) -> bool
    where
        F: FnOnce(&mut FeedbackData) + Send,
    {
        let _guard = self.feedback_lock.lock().await;
        let Some(store) = self.available().await else {
            return false;
        };

        let key = StorageKey::FeedbackData;
        let mut feedback = match store.get(key.as_str()).await {
            Ok(Some(json)) => match serde_json::from_str::<FeedbackData>(&json) {
                Ok(feedback) => feedback,
                Err(e) => {
                    error!("Stored {} is unreadable, not overwriting: {e}", key.as_str());
                    return false;
                }
            },
            Ok(None) => FeedbackData::default(),
            Err(e) => {
                error!("Failed to load {}: {e}", key.as_str());
                return false;
            }
        };

        modify(&mut feedback);
        write(store, key, &feedback).await
    }

    /// Removes one record, or all four when `key` is `None`.
    pub async fn clear(&self, key: Option<StorageKey>) {
        let Some(store) = self.available().await else {
            return;
        };

        let keys = match key {
            Some(key) => vec![key],
            None => StorageKey::ALL.to_vec(),
        };

        for key in keys {
            if let Err(e) = store.remove(key.as_str()).await {
                error!("Failed to clear {}: {e}", key.as_str());
            }
        }
    }

    /// Total size of the stored JSON across the four records, in UTF-8 bytes.
    pub async fn storage_size(&self) -> usize {
        let Some(store) = self.available().await else {
            return 0;
        };

        let mut total = 0;
        for key in StorageKey::ALL {
            if let Ok(Some(json)) = store.get(key.as_str()).await {
                total += json.len();
            }
        }
        total
    }
}

async fn write<T: Serialize>(store: &dyn KeyValueStore, key: StorageKey, value: &T) -> bool {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize {}: {e}", key.as_str());
            return false;
        }
    };

    match store.set(key.as_str(), &json).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save {}: {e}", key.as_str());
            false
        }
    }
}
