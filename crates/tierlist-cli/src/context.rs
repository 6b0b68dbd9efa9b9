use crate::cli::Cli;
use tierlist_core::{AppConfig, TierlistResult};
use tierlist_domain::commands::Command;
use tierlist_domain::{AppState, BoardSession, ChangeKind};
use tierlist_persistence::{FileStore, PersistenceBridge, StateSource};

pub struct CliContext {
    pub session: BoardSession,
    pub source: StateSource,
    bridge: PersistenceBridge<FileStore>,
}

impl CliContext {
    /// Opens the store named by the flags or config and restores the board.
    pub async fn load(cli: &Cli, config: &AppConfig) -> TierlistResult<Self> {
        let store_dir = cli
            .store
            .clone()
            .unwrap_or_else(|| config.effective_store_dir());
        let bridge = PersistenceBridge::new(
            FileStore::new(&store_dir),
            config.effective_share_base_url(),
            cli.auto_sync || config.auto_sync_url,
        );

        let mut session = BoardSession::new(AppState::default());
        let (state, source) = bridge
            .load_initial(cli.url.as_deref(), session.ids_mut())
            .await;
        session.replace_state(state);
        tracing::debug!(
            "Loaded board from {:?} ({} items)",
            source,
            session.state().items().len()
        );

        Ok(Self {
            session,
            source,
            bridge,
        })
    }

    pub fn state(&self) -> &AppState {
        self.session.state()
    }

    pub fn bridge(&self) -> &PersistenceBridge<FileStore> {
        &self.bridge
    }

    /// Runs a command and persists the board if it changed.
    pub async fn execute(&mut self, command: &dyn Command) -> TierlistResult<ChangeKind> {
        let change = self.session.execute(command)?;
        self.commit(change).await;
        Ok(change)
    }

    /// Persists after a committed change; anything else is left in memory.
    pub async fn commit(&self, change: ChangeKind) {
        self.bridge.after_change(change, self.session.state()).await;
    }
}
