use super::{ApiClient, RequestBody, RequestOptions};
use crate::auth::SessionStore;
use crate::error::{ApiError, Result};
use crate::models::{AdminCredentials, AdminSession, AdminUser};
use reqwest::Method;
use serde_json::Value;
use tracing::{info, warn};

const LOGIN: &str = "/admin/login";

/// Pull token and user out of a login response. The backend may answer
/// `{token, user}`, `{token, admin}` or wrap either in `data`.
fn session_from(body: Value) -> Result<AdminSession> {
    let body = match body {
        Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => map.remove("data").unwrap_or_default(),
        other => other,
    };

    let token = body
        .get("token")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::UnexpectedShape("login response has no token".into()))?
        .to_string();

    let user = match body.get("user").or_else(|| body.get("admin")) {
        Some(user) => serde_json::from_value::<AdminUser>(user.clone())?,
        None => AdminUser::default(),
    };

    Ok(AdminSession { token, user })
}

impl ApiClient {
    /// Exchange credentials for a bearer token
    pub async fn login(&self, credentials: &AdminCredentials) -> Result<AdminSession> {
        let options = RequestOptions::method(Method::POST).with_body(RequestBody::json(credentials)?);
        let session = session_from(self.request(LOGIN, options).await?)?;
        info!("Logged in as {}", session.user.email);
        Ok(session)
    }

    /// Log in and persist the session. A store failure is logged and the
    /// session is still returned.
    pub async fn login_and_store(&self, credentials: &AdminCredentials, store: &dyn SessionStore) -> Result<AdminSession> {
        let session = self.login(credentials).await?;
        if let Err(e) = store.save(&session).await {
            warn!("Could not persist admin session: {:#}", e);
        }
        Ok(session)
    }
}
