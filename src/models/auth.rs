use serde::{Deserialize, Serialize};

/// Login form for `/admin/login`
#[derive(Debug, Clone, Serialize)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// What a successful login yields and what gets persisted between runs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminSession {
    /// Opaque bearer token
    #[serde(rename = "adminToken")]
    pub token: String,
    #[serde(rename = "adminUser", default)]
    pub user: AdminUser,
}
