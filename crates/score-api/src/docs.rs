#![allow(clippy::needless_for_each)]

use utoipa::OpenApi;
use utoipauto::utoipauto;

#[utoipauto(paths = "./crates/score-api/src/")]
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Health", description = "Service status"),
        (name = "Vaults", description = "Vault score lookups")
    )
)]
pub struct ApiDoc;
