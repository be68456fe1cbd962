//!
//! Pretty-printed JSON output.
//!

///
/// Pretty-printed JSON output.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl Json {
    ///
    /// Serializes a value.
    ///
    pub fn new<V>(value: &V) -> anyhow::Result<Self>
    where
        V: serde::Serialize + ?Sized,
    {
        let content = serde_json::to_string_pretty(value)?;
        Ok(Self { content })
    }
}
