use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::Serialize;

/// The five party lists tracked in the 2023 Sejm results spreadsheet.
///
/// Declaration order matches the spreadsheet column order (columns 13..=17)
/// and doubles as the tie-break order in ranked selection: on equal vote
/// shares the earlier-declared party wins the higher placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    TrzeciaDroga,
    NowaLewica,
    Pis,
    Konfederacja,
    Ko,
}

impl Party {
    pub const ALL: [Party; 5] = [
        Party::TrzeciaDroga,
        Party::NowaLewica,
        Party::Pis,
        Party::Konfederacja,
        Party::Ko,
    ];

    /// Human-readable name, as used in legends and CLI input.
    pub fn name(&self) -> &'static str {
        match self {
            Party::TrzeciaDroga => "trzecia droga",
            Party::NowaLewica => "nowa lewica",
            Party::Pis => "pis",
            Party::Konfederacja => "konfederacja",
            Party::Ko => "ko",
        }
    }

    /// DataFrame column name for this party's vote share.
    pub fn column(&self) -> &'static str {
        match self {
            Party::TrzeciaDroga => "trzecia_droga",
            Party::NowaLewica => "nowa_lewica",
            Party::Pis => "pis",
            Party::Konfederacja => "konfederacja",
            Party::Ko => "ko",
        }
    }

    /// Zero-based column offset of this party's share in the results
    /// spreadsheet. Validated once at load time, not re-declared per query.
    pub(crate) fn sheet_column(&self) -> usize {
        match self {
            Party::TrzeciaDroga => 13,
            Party::NowaLewica => 14,
            Party::Pis => 15,
            Party::Konfederacja => 16,
            Party::Ko => 17,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Party {
    type Err = anyhow::Error;

    /// Case-insensitive parse; accepts both "nowa lewica" and "nowa_lewica".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', " ");
        for party in Party::ALL {
            if party.name() == key {
                return Ok(party);
            }
        }
        bail!(
            "unknown party: {:?}. Valid options: {}",
            s,
            Party::ALL.map(|p| p.name()).join(", ")
        )
    }
}
