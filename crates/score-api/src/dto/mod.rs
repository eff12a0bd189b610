pub mod response;
pub mod score;

pub use response::*;
pub use score::*;
