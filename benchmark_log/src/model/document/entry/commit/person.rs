//!
//! The commit author or committer.
//!

///
/// The commit author or committer.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Person {
    /// E-mail address.
    pub email: String,
    /// Full name.
    pub name: String,
    /// Hosting service login, missing for unlinked accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Fields unknown to this model, kept verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}
