use serde::{Deserialize, Deserializer, Serialize};

/// Built-in paper profiles. Anything unrecognised is treated as `Letter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl PaperSize {
    /// Resolves a profile name. Only the exact name `"a4"` selects A4; every
    /// other name, including `"A4"` and the empty string, maps to `Letter`.
    pub fn from_name(name: &str) -> Self {
        if name == "a4" {
            PaperSize::A4
        } else {
            PaperSize::Letter
        }
    }

    /// Page width and height in millimetres, portrait orientation.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::A4 => (210.0, 297.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::Letter => "letter",
            PaperSize::A4 => "a4",
        }
    }
}

impl<'de> Deserialize<'de> for PaperSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name.map(|n| Self::from_name(&n)).unwrap_or_default())
    }
}
