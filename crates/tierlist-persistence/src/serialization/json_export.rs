use crate::store::AtomicWriter;
use std::path::Path;
use tierlist_core::{TierlistError, TierlistResult};
use tierlist_domain::AppState;

/// File name suggested for exports.
pub const EXPORT_FILE_NAME: &str = "tierlist2d_state.json";

/// Canonical board JSON, pretty-printed with two-space indentation.
pub fn to_pretty_json(state: &AppState) -> TierlistResult<String> {
    serde_json::to_string_pretty(state).map_err(|e| TierlistError::Serialization(e.to_string()))
}

/// Writes the pretty-printed board to `path`.
pub async fn export_to_file(state: &AppState, path: &Path) -> TierlistResult<()> {
    let json = to_pretty_json(state)?;
    AtomicWriter::write_atomic(path, json.as_bytes()).await?;
    tracing::info!("Exported board to {}", path.display());
    Ok(())
}
