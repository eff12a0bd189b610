use axum::{
    Json,
    extract::{Path, State},
};
use score_metrics::LookupOutcome;
use score_sheets::{find_match, to_result};

use crate::{
    AppState,
    dto::{ErrorResponse, VaultScore},
    errors::ApiError,
};

#[utoipa::path(
    get,
    path = "/api/vault-score/{network}/{address}",
    tag = "Vaults",
    params(
        ("network" = String, Path, description = "Network name, matched case-insensitively"),
        ("address" = String, Path, description = "Vault address")
    ),
    responses(
        (status = 200, description = "Vault score", body = VaultScore),
        (status = 404, description = "Vault not found", body = ErrorResponse),
        (status = 500, description = "Table could not be loaded", body = ErrorResponse)
    )
)]
pub async fn get_vault_score(
    State(state): State<AppState>,
    Path((network, address)): Path<(String, String)>,
) -> Result<Json<VaultScore>, ApiError> {
    let lookups = &state.metrics.lookups;

    let rows = state.table.load_table().await.map_err(|e| {
        tracing::error!(%network, %address, error = %e, "Failed to load vault table");
        lookups.record_lookup(LookupOutcome::Error);
        ApiError::from(e)
    })?;

    let Some(row) = find_match(&rows, &network, &address, state.address_match) else {
        tracing::debug!(%network, %address, rows = rows.len(), "No matching vault");
        lookups.record_lookup(LookupOutcome::NotFound);
        return Err(ApiError::NotFound("Vault not found".to_string()));
    };

    lookups.record_lookup(LookupOutcome::Found {
        network: row.network().unwrap_or_default(),
    });
    Ok(Json(to_result(row).into()))
}
