//!
//! The benchmarking machine description.
//!

///
/// The benchmarking machine description, parsed from the `extra` field of a measurement.
///
/// The text is newline-delimited `key: value` pairs. Lines without a colon are skipped.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineInfo {
    /// The key-value pairs in their original order.
    pub fields: Vec<(String, String)>,
}

impl MachineInfo {
    /// Keys describing the CPU count.
    const CPU_COUNT_KEYS: [&'static str; 3] = ["cpu count", "cpus", "cores"];
    /// Keys describing the CPU model.
    const CPU_MODEL_KEYS: [&'static str; 3] = ["cpu model", "cpu", "model"];
    /// Keys describing the CPU speed.
    const CPU_SPEED_KEYS: [&'static str; 3] = ["cpu speed", "speed", "frequency"];
    /// Keys describing the memory size.
    const MEMORY_KEYS: [&'static str; 3] = ["total memory", "memory", "mem"];
    /// Keys describing the platform.
    const PLATFORM_KEYS: [&'static str; 2] = ["platform", "os"];
    /// Keys describing the OS release.
    const RELEASE_KEYS: [&'static str; 3] = ["os release", "release", "kernel"];
    /// Keys describing the CPU architecture.
    const ARCHITECTURE_KEYS: [&'static str; 3] = ["architecture", "arch", "machine"];

    ///
    /// Parses the machine description.
    ///
    pub fn parse(text: &str) -> Self {
        let fields = text
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        Self { fields }
    }

    ///
    /// Returns the value of the first field matching the key, ignoring case.
    ///
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    ///
    /// Returns the number of CPUs.
    ///
    pub fn cpu_count(&self) -> Option<usize> {
        self.get_any(&Self::CPU_COUNT_KEYS)
            .and_then(|value| value.parse().ok())
    }

    ///
    /// Returns the CPU model.
    ///
    pub fn cpu_model(&self) -> Option<&str> {
        self.get_any(&Self::CPU_MODEL_KEYS)
    }

    ///
    /// Returns the CPU speed.
    ///
    pub fn cpu_speed(&self) -> Option<&str> {
        self.get_any(&Self::CPU_SPEED_KEYS)
    }

    ///
    /// Returns the memory size.
    ///
    pub fn memory(&self) -> Option<&str> {
        self.get_any(&Self::MEMORY_KEYS)
    }

    ///
    /// Returns the platform.
    ///
    pub fn platform(&self) -> Option<&str> {
        self.get_any(&Self::PLATFORM_KEYS)
    }

    ///
    /// Returns the OS release.
    ///
    pub fn release(&self) -> Option<&str> {
        self.get_any(&Self::RELEASE_KEYS)
    }

    ///
    /// Returns the CPU architecture.
    ///
    pub fn architecture(&self) -> Option<&str> {
        self.get_any(&Self::ARCHITECTURE_KEYS)
    }

    ///
    /// Whether the description has no fields.
    ///
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn get_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }
}

impl std::fmt::Display for MachineInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::with_capacity(4);
        if let Some(count) = self.cpu_count() {
            parts.push(format!("{count} x"));
        }
        if let Some(model) = self.cpu_model() {
            parts.push(model.to_owned());
        }
        if let Some(memory) = self.memory() {
            parts.push(memory.to_owned());
        }
        if let (Some(platform), Some(architecture)) = (self.platform(), self.architecture()) {
            parts.push(format!("{platform}/{architecture}"));
        }
        f.write_str(parts.join(" ").as_str())
    }
}
