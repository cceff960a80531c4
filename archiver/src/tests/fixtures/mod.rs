use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

/// Load a JSON fixture by name
pub fn load_json_fixture(fixture_name: &str) -> String {
    let path = Path::new("src/tests/fixtures").join(format!("{}.json", fixture_name));
    fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to load test fixture: {}", fixture_name))
}

/// The moment fixtures are written against: 2024-06-15T12:00:00Z.
/// Seven days earlier is 1717848000.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub const CUTOFF_EPOCH: i64 = 1_717_848_000;
