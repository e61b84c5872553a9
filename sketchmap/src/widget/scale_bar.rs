use serde::{Deserialize, Serialize};

/// Units shown by a scale bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleUnit {
    /// Meters and kilometers.
    Metric,
    /// Feet and miles.
    NonMetric,
    /// Both metric and non-metric bars.
    #[default]
    Dual,
}

/// Scale bar widget. Measuring is done by the engine; the widget only carries its settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScaleBar {
    unit: ScaleUnit,
}

impl ScaleBar {
    /// Creates a scale bar showing the given units.
    pub fn new(unit: ScaleUnit) -> Self {
        Self { unit }
    }

    /// Units shown by the bar.
    pub fn unit(&self) -> ScaleUnit {
        self.unit
    }
}
