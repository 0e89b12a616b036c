//! Canonical field names all source schemas are mapped onto.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four required telemetry signals.
///
/// Source logs use arbitrary column headers; the mapping table renames
/// them onto these canonical names before any processing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    /// Manifold absolute pressure in millibar.
    MapMbar,
    /// Engine speed in revolutions per minute.
    Rpm,
    /// Short-term fuel trim, percent.
    Stft,
    /// Long-term fuel trim, percent.
    Ltft,
}

impl CanonicalField {
    /// The full required set, in canonical order.
    pub const ALL: [CanonicalField; 4] = [
        CanonicalField::MapMbar,
        CanonicalField::Rpm,
        CanonicalField::Stft,
        CanonicalField::Ltft,
    ];

    /// The canonical column name used after renaming.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MapMbar => "MAP_mbar",
            Self::Rpm => "RPM",
            Self::Stft => "STFT",
            Self::Ltft => "LTFT",
        }
    }

    /// Parses a canonical column name. Exact match only; the mapping
    /// table is responsible for producing these names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::MapMbar => "Manifold absolute pressure (mbar)",
            Self::Rpm => "Engine speed (rev/min)",
            Self::Stft => "Short-term fuel trim (%)",
            Self::Ltft => "Long-term fuel trim (%)",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
