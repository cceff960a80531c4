use chrono::{DateTime, Duration, Utc};
use log::warn;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const UNTITLED: &str = "Untitled";

/// The account descriptor leading every `bookmarks/list` response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Account {
    pub user_id: Option<i64>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Bookmark {
    pub bookmark_id: i64,
    #[serde(default)]
    pub title: Option<String>,
    /// Unix epoch seconds, UTC.
    pub time: i64,
}

impl Bookmark {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// A `bookmarks/list` response: `[account, bookmark, bookmark, ...]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListResponse {
    pub account: Option<Account>,
    pub bookmarks: Vec<Bookmark>,
}

impl<'de> Deserialize<'de> for ListResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut items = Vec::<Value>::deserialize(deserializer)?.into_iter();

        // The leading element is always the account, whatever its shape
        let account = items
            .next()
            .map(|value| serde_json::from_value(value).unwrap_or_default());

        let bookmarks = items
            .filter_map(|value| match serde_json::from_value::<Bookmark>(value) {
                Ok(bookmark) => Some(bookmark),
                Err(e) => {
                    warn!("Skipping list entry that is not a bookmark: {}", e);
                    None
                }
            })
            .collect();

        Ok(ListResponse { account, bookmarks })
    }
}

pub fn cutoff(now: DateTime<Utc>, retention: Duration) -> DateTime<Utc> {
    now - retention
}

/// Bookmarks created strictly before `now - retention`, in listing order.
pub fn select_due(
    bookmarks: Vec<Bookmark>,
    now: DateTime<Utc>,
    retention: Duration,
) -> Vec<Bookmark> {
    let cutoff = cutoff(now, retention);
    bookmarks
        .into_iter()
        .filter(|bookmark| match bookmark.created_at() {
            Some(created) => created < cutoff,
            None => {
                warn!(
                    "Bookmark {} has an out of range time {}",
                    bookmark.bookmark_id, bookmark.time
                );
                false
            }
        })
        .collect()
}
