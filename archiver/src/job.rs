use chrono::{DateTime, Duration, Utc};
use log::{debug, info};

use crate::bookmark::{cutoff, select_due, Bookmark};
use crate::client::{Authenticator, BookmarkService};
use crate::config::Config;
use crate::error::Result;

pub const DEFAULT_TAG: &str = "newsletter";
pub const DEFAULT_RETENTION_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct JobOptions {
    pub tag: String,
    pub retention_days: i64,
}

impl Default for JobOptions {
    fn default() -> Self {
        JobOptions {
            tag: DEFAULT_TAG.to_string(),
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl JobOptions {
    pub fn retention(&self) -> Duration {
        Duration::days(self.retention_days)
    }
}

/// Counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Bookmarks returned for the tag.
    pub found: usize,
    /// Bookmarks older than the cutoff.
    pub due: usize,
    pub archived: usize,
    pub failed: usize,
}

impl Summary {
    /// A failed listing reads as "nothing found" and still exits 0.
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else {
            0
        }
    }
}

/// Authenticates, lists `options.tag`, and archives everything older than
/// the retention window measured from `now`.
///
/// Errors only for fatal authentication failures. Archive failures are
/// counted in the returned [`Summary`].
pub fn run<A: Authenticator>(
    authenticator: &A,
    config: &Config,
    options: &JobOptions,
    now: DateTime<Utc>,
) -> Result<Summary> {
    println!("Authenticating with Instapaper...");
    let session = authenticator.authenticate(&config.username, &config.password)?;

    println!("Fetching {} bookmarks...", options.tag);
    let bookmarks = session.list_bookmarks(&options.tag);
    println!("Found {} bookmarks with '{}' tag", bookmarks.len(), options.tag);

    let mut summary = Summary {
        found: bookmarks.len(),
        ..Summary::default()
    };

    if bookmarks.is_empty() {
        println!("No bookmarks to process");
        return Ok(summary);
    }

    debug!("Cutoff is {}", cutoff(now, options.retention()));
    let due = select_due(bookmarks, now, options.retention());
    summary.due = due.len();
    println!(
        "Found {} '{}' bookmarks older than {} days",
        due.len(),
        options.tag,
        options.retention_days
    );

    if due.is_empty() {
        println!("No bookmarks to archive");
        return Ok(summary);
    }

    archive_all(&session, &due, &mut summary);

    println!("\nSummary: {} archived, {} failed", summary.archived, summary.failed);
    info!("Run finished: {:?}", summary);

    Ok(summary)
}

fn archive_all<S: BookmarkService>(session: &S, due: &[Bookmark], summary: &mut Summary) {
    for bookmark in due {
        if session.archive(bookmark.bookmark_id) {
            summary.archived += 1;
            println!("✓ Archived: {}", bookmark.title());
        } else {
            summary.failed += 1;
            eprintln!("✗ Failed to archive: {}", bookmark.title());
        }
    }
}
