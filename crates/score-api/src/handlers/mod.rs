pub mod health;
pub mod score;

pub use health::health;
pub use score::get_vault_score;
