pub mod config;
pub mod error;
pub mod result;
pub mod selection;

pub use config::AppConfig;
pub use error::TierlistError;
pub use result::TierlistResult;
pub use selection::SelectionState;
