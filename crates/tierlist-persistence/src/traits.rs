use async_trait::async_trait;
use tierlist_core::TierlistResult;

/// Key of the durable record holding the board as uncompressed JSON.
pub const STATE_KEY: &str = "tierlist2d-state";

/// Key of the current share fragment (the encoded board of the last share).
pub const FRAGMENT_KEY: &str = "tierlist2d-fragment";

/// String key-value storage.
/// Implementations handle different backends (directory of files, memory, ...)
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> TierlistResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> TierlistResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    async fn remove(&self, key: &str) -> TierlistResult<()>;
}
