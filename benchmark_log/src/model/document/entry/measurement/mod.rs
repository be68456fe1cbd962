//!
//! A single named benchmark measurement.
//!

pub mod machine;

use self::machine::MachineInfo;

///
/// A single named benchmark measurement.
///
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurement {
    /// Metric label, unique within an entry.
    pub name: String,
    /// Measured value.
    #[serde(serialize_with = "serialize_value")]
    pub value: f64,
    /// Variance of the value, e.g. `± 1.2`, if the tool reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Unit, e.g. `tps` or `extrinsics/block`.
    pub unit: String,
    /// Free-text description of the benchmarking environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
    /// Fields unknown to this model, kept verbatim.
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl Measurement {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            range: None,
            unit: unit.into(),
            extra: None,
            other: serde_json::Map::new(),
        }
    }

    ///
    /// Sets the environment description.
    ///
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    ///
    /// Parses the environment description.
    ///
    pub fn machine(&self) -> Option<MachineInfo> {
        self.extra
            .as_deref()
            .map(MachineInfo::parse)
            .filter(|machine| !machine.is_empty())
    }

    ///
    /// Whether the value can be plotted.
    ///
    pub fn is_plottable(&self) -> bool {
        self.value.is_finite()
    }
}

///
/// Writes integral values without the fractional part, the way `JSON.stringify` does.
///
/// Other values, including the non-finite ones written as `null`, are left to the serializer.
///
fn serialize_value<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
