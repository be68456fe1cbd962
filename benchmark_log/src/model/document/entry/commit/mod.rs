//!
//! The benchmarked commit.
//!

pub mod person;

use chrono::DateTime;
use chrono::FixedOffset;

use self::person::Person;

///
/// The benchmarked commit, as reported by the hosting service.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    /// The commit author.
    pub author: Person,
    /// The commit committer.
    pub committer: Person,
    /// Whether the commit is distinct from the ones already pushed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distinct: Option<bool>,
    /// Full commit hash.
    pub id: String,
    /// Commit message.
    pub message: String,
    /// ISO-8601 commit timestamp, kept verbatim.
    pub timestamp: String,
    /// Tree hash.
    pub tree_id: String,
    /// Commit URL.
    pub url: String,
    /// Fields unknown to this model, kept verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Commit {
    /// Length of the abbreviated commit hash.
    pub const SHORT_ID_LENGTH: usize = 7;

    ///
    /// Returns the abbreviated commit hash.
    ///
    pub fn short_id(&self) -> &str {
        self.id
            .char_indices()
            .nth(Self::SHORT_ID_LENGTH)
            .map(|(index, _)| &self.id[..index])
            .unwrap_or(self.id.as_str())
    }

    ///
    /// Returns the first line of the commit message.
    ///
    pub fn title(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    ///
    /// Parses the commit timestamp.
    ///
    pub fn parsed_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.timestamp.as_str()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::Commit;

    #[test]
    fn short_id() {
        let commit = Commit {
            id: "a816094d4b3e5c3e2e4c5f9f8ea3f2f6b1d7c0e2".to_owned(),
            ..Default::default()
        };
        assert_eq!(commit.short_id(), "a816094");

        let commit = Commit {
            id: "abc".to_owned(),
            ..Default::default()
        };
        assert_eq!(commit.short_id(), "abc");
    }

    #[test]
    fn title_and_timestamp() {
        let commit = Commit {
            message: "Bump runtime\n\nSigned-off-by: CI".to_owned(),
            timestamp: "2023-06-12T18:24:09+02:00".to_owned(),
            ..Default::default()
        };
        assert_eq!(commit.title(), "Bump runtime");
        let timestamp = commit.parsed_timestamp().expect("Valid timestamp");
        assert_eq!(timestamp.timestamp(), 1686587049);
    }
}
