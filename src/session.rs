use crate::client::ApiClient;
use crate::core::errors::ApiError;
use crate::models::models::User;
use crate::users;

/// Single source of truth for "who is logged in".
///
/// An explicit value with a constructed lifecycle: build one per process,
/// pass it by reference to whatever needs identity. Session state is
/// all-or-nothing; the only durable side effect is the token slot shared
/// with the `ApiClient`.
#[derive(Debug)]
pub struct SessionStore {
    api: ApiClient,
    token: Option<String>,
    current_user: Option<User>,
    loading: bool,
    initialized: bool,
}

impl SessionStore {
    pub fn new(api: ApiClient) -> Self {
        SessionStore {
            api,
            token: None,
            current_user: None,
            loading: false,
            initialized: false,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.current_user.is_some()
    }

    /// Resolve a previously persisted token into a live session. Runs once
    /// per store; later calls are no-ops. An auth rejection purges the slot
    /// and resolves to a logged-out session without surfacing an error
    /// (expected path for a stale token); other failures surface but keep
    /// the persisted token for a later retry.
    pub async fn initialize(&mut self) -> Result<(), ApiError> {
        if self.initialized {
            return Ok(());
        }
        self.initialized = true;

        let Some(stored) = self.api.token_store().load() else {
            return Ok(());
        };

        self.loading = true;
        let result = users::current(&self.api).await;
        self.loading = false;

        match result {
            Ok(user) => {
                self.token = Some(stored);
                self.current_user = Some(user);
                Ok(())
            }
            Err(err) if err.is_auth_error() => {
                tracing::warn!("stored token rejected, clearing session");
                self.teardown();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Adopt a freshly issued token. All-or-nothing: when this returns Ok
    /// the session is fully populated; on any failure both the in-memory
    /// session and the persisted slot are rolled back to empty.
    pub async fn login(&mut self, token: &str) -> Result<(), ApiError> {
        self.initialized = true;
        // Persist first: the client re-reads the slot per request, so the
        // current-user resolution below runs authenticated.
        if let Err(err) = self.api.token_store().save(token) {
            return Err(ApiError::Validation(format!("could not persist token: {}", err)));
        }
        self.loading = true;
        let result = users::current(&self.api).await;
        self.loading = false;

        match result {
            Ok(user) => {
                self.token = Some(token.to_string());
                self.current_user = Some(user);
                Ok(())
            }
            Err(err) => {
                self.teardown();
                Err(err)
            }
        }
    }

    /// Synchronous teardown: purge the slot, clear the session. No network.
    pub fn logout(&mut self) {
        self.teardown();
    }

    /// Re-resolve the current user under the existing token, used after any
    /// mutation of the caller's own record (profile edit, follow/unfollow).
    /// A 401/403 behaves as an implicit logout; any other failure leaves the
    /// previous snapshot in place.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        if self.token.is_none() {
            return Err(ApiError::Validation("No active session".to_string()));
        }

        match users::current(&self.api).await {
            Ok(user) => {
                self.current_user = Some(user);
                Ok(())
            }
            Err(err) => {
                if err.is_auth_error() {
                    tracing::warn!("session rejected during refresh, logging out");
                    self.teardown();
                }
                Err(err)
            }
        }
    }

    fn teardown(&mut self) {
        self.api.token_store().clear();
        self.token = None;
        self.current_user = None;
        self.loading = false;
    }
}
