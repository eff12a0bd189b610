use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

const NAME_CELL: usize = 0;
const NETWORK_CELL: usize = 4;
const ADDRESS_CELL: usize = 5;
const SCORE_CELL: usize = 6;

const SCORE_PREFIX: &str = "Score: ";
const MISSING_SCORE: &str = "N/A";

/// One spreadsheet row, cells in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultRow(pub Vec<String>);

impl VaultRow {
    /// Returns the cell at `idx` when it exists and is non-empty.
    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.0
            .get(idx)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.cell(NAME_CELL)
    }

    pub fn network(&self) -> Option<&str> {
        self.cell(NETWORK_CELL)
    }

    pub fn address(&self) -> Option<&str> {
        self.cell(ADDRESS_CELL)
    }

    pub fn score(&self) -> Option<&str> {
        self.cell(SCORE_CELL)
    }
}

impl<S: Into<String>> FromIterator<S> for VaultRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// How the address cell is compared with the queried address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AddressMatch {
    /// Byte-for-byte equality.
    Exact,
    /// Equality after trimming surrounding whitespace on both sides.
    #[default]
    Trimmed,
    /// Trimmed, then compared ignoring case.
    CaseInsensitive,
}

impl AddressMatch {
    pub fn matches(self, cell: &str, query: &str) -> bool {
        match self {
            Self::Exact => cell == query,
            Self::Trimmed => cell.trim() == query.trim(),
            Self::CaseInsensitive => cell.trim().to_lowercase() == query.trim().to_lowercase(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Trimmed => "trimmed",
            Self::CaseInsensitive => "case-insensitive",
        }
    }
}

impl fmt::Display for AddressMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "trimmed" => Ok(Self::Trimmed),
            "case-insensitive" | "case_insensitive" => Ok(Self::CaseInsensitive),
            other => Err(format!(
                "unknown address match policy `{other}` (expected exact, trimmed or case-insensitive)"
            )),
        }
    }
}

/// Score payload returned for a matched vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub name: String,
    pub score: String,
}

/// First row whose network matches case-insensitively and whose address
/// matches under `policy`. Rows missing either cell never match.
pub fn find_match<'a>(
    rows: &'a [VaultRow],
    network: &str,
    address: &str,
    policy: AddressMatch,
) -> Option<&'a VaultRow> {
    let network = network.to_lowercase();
    rows.iter().find(|row| {
        let (Some(row_network), Some(row_address)) = (row.network(), row.address()) else {
            return false;
        };
        row_network.to_lowercase() == network && policy.matches(row_address, address)
    })
}

/// Projects a row to its name and prefixed raw score. The score is not parsed.
///
/// An absent or empty score cell renders as `Score: N/A`, not as a bare
/// `Score: ` prefix.
pub fn to_result(row: &VaultRow) -> ScoreResult {
    ScoreResult {
        name: row.name().unwrap_or_default().to_string(),
        score: format!("{SCORE_PREFIX}{}", row.score().unwrap_or(MISSING_SCORE)),
    }
}
