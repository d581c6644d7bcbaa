use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// The single durable slot holding the bearer token, backed by a file.
///
/// Mirrors the shared-resource policy of the client: read at initialization
/// and before every outgoing request, written only on login, deleted on
/// logout or auth rejection. No other state is persisted.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        TokenStore { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Current token, or `None` when the slot is empty or unreadable.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() { None } else { Some(token) }
            }
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), error = %err, "failed to read token slot");
                }
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, token)
    }

    /// Purge the slot. Missing file counts as already purged.
    pub fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), error = %err, "failed to purge token slot");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> TokenStore {
        let mut path = std::env::temp_dir();
        path.push(format!("snapbee_token_test_{}_{}", std::process::id(), name));
        let store = TokenStore::new(path);
        store.clear();
        store
    }

    #[test]
    fn empty_slot_loads_none() {
        let store = temp_store("empty");
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_load_clear_round_trip() {
        let store = temp_store("round_trip");
        store.save("tok-123").unwrap();
        assert_eq!(store.load(), Some("tok-123".to_string()));
        store.clear();
        assert_eq!(store.load(), None);
        // Clearing twice is fine.
        store.clear();
    }

    #[test]
    fn whitespace_only_slot_counts_as_empty() {
        let store = temp_store("blank");
        store.save("  \n").unwrap();
        assert_eq!(store.load(), None);
        store.clear();
    }
}
