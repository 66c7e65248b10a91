use crate::seed::{load_state, serialize_state, State};
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::error;

/// Shared handle to the JSON file state backing the file-backed
/// repositories. All of them read through one in-process snapshot; writes
/// persist the whole state back to disk, matching the single-file layout of
/// the state document.
pub struct FileState {
    path: PathBuf,
    state: RwLock<State>,
}

impl FileState {
    /// Opens the state file, seeding it first when it does not exist yet.
    pub fn load(path: &Path, seed_path: Option<&Path>, now_ms: i64) -> anyhow::Result<Self> {
        let state = if path.exists() {
            load_state(path, now_ms)?
        } else {
            let state = match seed_path {
                Some(seed_path) => load_state(seed_path, now_ms)?,
                None => State::default(),
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, serialize_state(&state)?)
                .with_context(|| format!("Could not write state file: {}", path.display()))?;
            state
        };

        Ok(Self {
            path: path.to_path_buf(),
            state: RwLock::new(state),
        })
    }

    pub fn read<T>(&self, f: impl FnOnce(&State) -> T) -> T {
        f(&self.state.read().unwrap())
    }

    /// Mutates the state and persists it. A failed disk write keeps the
    /// in-process state so the data survives until the next attempt.
    pub fn write<T>(&self, f: impl FnOnce(&mut State) -> T) -> T {
        let mut state = self.state.write().unwrap();
        let res = f(&mut state);
        match serialize_state(&state) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    error!("Could not persist state file {}: {:?}", self.path.display(), e);
                }
            }
            Err(e) => error!("Could not serialize state: {:?}", e),
        }
        res
    }
}
