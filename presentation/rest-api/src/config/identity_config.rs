use anyhow::Context;

const DEFAULT_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";

/// External identity provider that signs session tokens.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub project_id: String,
    pub certs_url: String,
}

impl IdentityConfig {
    /// Load identity settings from environment variables
    ///
    /// Environment variables:
    /// - IDENTITY_PROJECT_ID: Project tokens are issued for (required)
    /// - IDENTITY_CERTS_URL: x509 signing certificates endpoint
    ///   (default: Google securetoken certificates)
    pub fn from_env() -> anyhow::Result<Self> {
        let project_id = std::env::var("IDENTITY_PROJECT_ID")
            .context("IDENTITY_PROJECT_ID must be set")?;
        let certs_url =
            std::env::var("IDENTITY_CERTS_URL").unwrap_or_else(|_| DEFAULT_CERTS_URL.to_string());

        Ok(Self {
            project_id,
            certs_url,
        })
    }

    /// Expected `iss` claim of session tokens.
    pub fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }
}
