use score_sheets::ScoreResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Score of a single vault
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaultScore {
    #[schema(example = "Alpha Vault")]
    pub name: String,
    /// Raw sheet value prefixed with `Score: `
    #[schema(example = "Score: 87")]
    pub score: String,
}

impl From<ScoreResult> for VaultScore {
    fn from(result: ScoreResult) -> Self {
        Self {
            name: result.name,
            score: result.score,
        }
    }
}
