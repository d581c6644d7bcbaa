use crate::client::ApiClient;
use crate::core::errors::ApiError;
use crate::core::helpers::{require_email, require_non_empty};
use crate::models::models::{LoginRequest, SignupRequest, User};

/// Register a new account. The backend echoes the created user record.
pub async fn signup(client: &ApiClient, req: &SignupRequest) -> Result<User, ApiError> {
    require_non_empty(&req.name, "Name")?;
    require_email(&req.email)?;
    require_non_empty(&req.username, "Username")?;
    require_non_empty(&req.password, "Password")?;

    client.post("/auth/signup", req).await
}

/// Exchange credentials for an opaque bearer token. The success body is the
/// raw token text, not JSON.
pub async fn login(client: &ApiClient, req: &LoginRequest) -> Result<String, ApiError> {
    require_email(&req.email)?;
    require_non_empty(&req.password, "Password")?;

    let token = client.post_text("/auth/login", req).await?;
    let token = token.trim().to_string();
    if token.is_empty() {
        return Err(ApiError::Decode("login returned an empty token".to_string()));
    }
    Ok(token)
}
