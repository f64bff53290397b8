//! Seeded transcription history.
//!
//! Entries are static demo data: read-only, never created or destroyed at
//! runtime. Selecting one replaces the session's URL and transcript.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub title: String,
    pub date: String,
    pub duration: String,
    pub url: String,
}

/// The pre-seeded history list.
pub fn seed() -> Vec<HistoryEntry> {
    [
        (
            "1",
            "Introduction to Machine Learning",
            "2024-01-15",
            "12:45",
            "https://youtube.com/watch?v=example1",
        ),
        (
            "2",
            "React Hooks Tutorial",
            "2024-01-14",
            "8:30",
            "https://youtube.com/watch?v=example2",
        ),
        (
            "3",
            "Python Data Analysis",
            "2024-01-13",
            "15:20",
            "https://youtube.com/watch?v=example3",
        ),
        (
            "4",
            "CSS Grid Layout",
            "2024-01-12",
            "6:15",
            "https://youtube.com/watch?v=example4",
        ),
    ]
    .into_iter()
    .map(|(id, title, date, duration, url)| HistoryEntry {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        duration: duration.to_string(),
        url: url.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_stable_and_ordered() {
        let entries = seed();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].id, "1");
        assert_eq!(entries[0].title, "Introduction to Machine Learning");
        assert_eq!(entries[3].url, "https://youtube.com/watch?v=example4");
        assert_eq!(seed(), entries);
    }
}
