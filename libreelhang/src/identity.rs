//! Identity configuration
//!
//! Initializes an auth client and a document-store client from a static
//! config block, once at process start. Nothing in the game or catalog
//! path calls into these handles; they exist as an external collaborator
//! supplying user identity only.

use serde::{Deserialize, Serialize};

/// Static identity configuration block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    #[serde(default)]
    pub measurement_id: Option<String>,
}

/// Opaque authentication client handle.
#[derive(Debug, Clone)]
pub struct AuthClient {
    project_id: String,
}

impl AuthClient {
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// Opaque document-store client handle.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    project_id: String,
}

impl DocumentStore {
    pub fn project_id(&self) -> &str {
        &self.project_id
    }
}

/// The two handles exported by identity initialization.
#[derive(Debug, Clone)]
pub struct IdentityHandles {
    pub auth: AuthClient,
    pub store: DocumentStore,
}

impl IdentityHandles {
    /// Initialize both handles from the config block.
    pub fn initialize(config: &IdentityConfig) -> Self {
        tracing::debug!(
            project_id = %config.project_id,
            auth_domain = %config.auth_domain,
            "identity handles initialized"
        );

        Self {
            auth: AuthClient {
                project_id: config.project_id.clone(),
            },
            store: DocumentStore {
                project_id: config.project_id.clone(),
            },
        }
    }
}
