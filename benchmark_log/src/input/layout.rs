//!
//! Benchmark log file layout.
//!

use std::path::Path;

///
/// Benchmark log file layout.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// The bare JSON document.
    Json,
    /// The JSON document assigned to a global variable, for inclusion via a `<script>` tag.
    Script {
        /// The name of the variable on `window`.
        variable: String,
    },
}

impl Default for Layout {
    fn default() -> Self {
        Self::script()
    }
}

impl Layout {
    /// The global variable read by the dashboard page.
    pub const DEFAULT_VARIABLE: &'static str = "BENCHMARK_DATA";

    ///
    /// Returns the script layout with the default variable.
    ///
    pub fn script() -> Self {
        Self::Script {
            variable: Self::DEFAULT_VARIABLE.to_owned(),
        }
    }

    ///
    /// Chooses the layout of a new log file by its extension.
    ///
    pub fn from_extension(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::Json,
            _ => Self::script(),
        }
    }

    ///
    /// Detects the layout of the text and returns it with the JSON body.
    ///
    /// # Errors
    ///
    /// If the text starts with a `window.` assignment that is malformed.
    ///
    pub fn detect(text: &str) -> Result<(Self, &str), String> {
        let text = text.trim_start_matches('\u{feff}').trim();
        let Some(assignment) = text.strip_prefix("window.") else {
            return Ok((Self::Json, text));
        };

        let (variable, body) = assignment
            .split_once('=')
            .ok_or_else(|| "missing `=` after the global variable".to_owned())?;
        let variable = variable.trim();
        if variable.is_empty()
            || !variable
                .chars()
                .all(|character| character.is_ascii_alphanumeric() || character == '_')
        {
            return Err(format!("invalid global variable name `{variable}`"));
        }

        let body = body.trim();
        let body = body.strip_suffix(';').unwrap_or(body).trim_end();
        Ok((
            Self::Script {
                variable: variable.to_owned(),
            },
            body,
        ))
    }

    ///
    /// Wraps the JSON body according to the layout.
    ///
    pub fn wrap(&self, json: String) -> String {
        match self {
            Self::Json => json,
            Self::Script { variable } => format!("window.{variable} = {json}"),
        }
    }
}

impl std::str::FromStr for Layout {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "script" | "js" => Ok(Self::script()),
            string => {
                anyhow::bail!("Unknown log layout `{string}`. Supported layouts: json, script")
            }
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Script { .. } => write!(f, "script"),
        }
    }
}
