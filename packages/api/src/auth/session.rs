//! Session access helpers.
//!
//! Server functions receive the `tower_sessions::Session` explicitly; these
//! helpers read the signed-in user id back out of it. There is no global
//! auth context — every function that needs the user takes the session as a
//! parameter and resolves it here.

use dioxus::prelude::ServerFnError;
use tower_sessions::Session;
use uuid::Uuid;

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The signed-in user's id, or `None` for anonymous sessions.
pub async fn current_user_id(session: &Session) -> Result<Option<Uuid>, ServerFnError> {
    let user_id: Option<String> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    match user_id {
        Some(id) => {
            let uuid = Uuid::parse_str(&id).map_err(|e| ServerFnError::new(e.to_string()))?;
            Ok(Some(uuid))
        }
        None => Ok(None),
    }
}

/// The signed-in user's id, or an error for anonymous sessions.
pub async fn require_user_id(session: &Session) -> Result<Uuid, ServerFnError> {
    current_user_id(session)
        .await?
        .ok_or_else(|| ServerFnError::new("Not authenticated"))
}
