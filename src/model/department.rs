//! Department types: the fixed set of plant sections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A plant section. Records are assigned one at entry time.
///
/// Serialized and displayed under the Spanish names the roster has
/// always used, accents included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Envasado,
    #[serde(rename = "Logística")]
    Logistica,
    #[serde(rename = "Elaboración")]
    Elaboracion,
    Calidad,
    Mantenimiento,
}

impl Department {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Envasado => "Envasado",
            Self::Logistica => "Logística",
            Self::Elaboracion => "Elaboración",
            Self::Calidad => "Calidad",
            Self::Mantenimiento => "Mantenimiento",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_under_accented_display_name() {
        let json = serde_json::to_string(&Department::Logistica).unwrap();
        assert_eq!(json, "\"Logística\"");
        let back: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Department::Logistica);
    }

    #[test]
    fn display_matches_serialized_form() {
        assert_eq!(Department::Elaboracion.to_string(), "Elaboración");
        assert_eq!(Department::Calidad.to_string(), "Calidad");
    }
}
