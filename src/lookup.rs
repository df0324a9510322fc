//! Enumeration lookup tables
//!
//! Static code-to-label tables for the three coded survey fields. The tables are
//! plain read-only data and never change at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SECTORS: &[(&str, &str)] = &[
    ("marketing", "Marketing & Werbung"),
    ("beratung", "Beratung & Dienstleistungen"),
    ("it", "IT & Software"),
    ("finanzen", "Finanzen & Versicherungen"),
    ("handel", "Handel & E-Commerce"),
    ("bildung", "Bildung"),
    ("verwaltung", "Verwaltung"),
    ("gesundheit", "Gesundheit & Pflege"),
    ("bau", "Bauwesen & Architektur"),
    ("medien", "Medien & Kreativwirtschaft"),
    ("industrie", "Industrie & Produktion"),
    ("logistik", "Transport & Logistik"),
];

const SIZE_CLASSES: &[(&str, &str)] = &[
    ("solo", "Solo"),
    ("team", "2–10 (Kleines Team)"),
    ("kmu", "11–100 (KMU)"),
];

const JURISDICTIONS: &[(&str, &str)] = &[
    ("bw", "Baden-Württemberg"),
    ("by", "Bayern"),
    ("be", "Berlin"),
    ("bb", "Brandenburg"),
    ("hb", "Bremen"),
    ("hh", "Hamburg"),
    ("he", "Hessen"),
    ("mv", "Mecklenburg-Vorpommern"),
    ("ni", "Niedersachsen"),
    ("nw", "Nordrhein-Westfalen"),
    ("rp", "Rheinland-Pfalz"),
    ("sl", "Saarland"),
    ("sn", "Sachsen"),
    ("st", "Sachsen-Anhalt"),
    ("sh", "Schleswig-Holstein"),
    ("th", "Thüringen"),
];

/// One of the three coded survey fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupTable {
    /// Industry sector (`branche`)
    Sector,
    /// Organization size class (`unternehmensgroesse`)
    Size,
    /// Federal state (`bundesland`)
    Jurisdiction,
}

impl LookupTable {
    pub const ALL: [LookupTable; 3] = [
        LookupTable::Sector,
        LookupTable::Size,
        LookupTable::Jurisdiction,
    ];

    /// All `(code, label)` pairs in display order.
    pub fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            LookupTable::Sector => SECTORS,
            LookupTable::Size => SIZE_CLASSES,
            LookupTable::Jurisdiction => JURISDICTIONS,
        }
    }

    /// Form field holding this table's code.
    pub fn form_field(self) -> &'static str {
        match self {
            LookupTable::Sector => "branche",
            LookupTable::Size => "unternehmensgroesse",
            LookupTable::Jurisdiction => "bundesland",
        }
    }

    /// Exact-match label lookup. Codes are case-sensitive.
    pub fn label(self, code: &str) -> Option<&'static str> {
        self.entries()
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, label)| *label)
    }

    /// Reverse lookup from a display label or a differently-cased code.
    pub fn code_for_label(self, label: &str) -> Option<&'static str> {
        let wanted = label.trim().to_lowercase();
        self.entries()
            .iter()
            .find(|(code, known)| known.to_lowercase() == wanted || *code == wanted)
            .map(|(code, _)| *code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LookupTable::Sector => "sector",
            LookupTable::Size => "size",
            LookupTable::Jurisdiction => "jurisdiction",
        }
    }
}

impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupTable {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sector" | "branche" => Ok(LookupTable::Sector),
            "size" | "unternehmensgroesse" => Ok(LookupTable::Size),
            "jurisdiction" | "bundesland" => Ok(LookupTable::Jurisdiction),
            other => Err(format!(
                "Unknown table: {} (must be 'sector', 'size' or 'jurisdiction')",
                other
            )),
        }
    }
}
