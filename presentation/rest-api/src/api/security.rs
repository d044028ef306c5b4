use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use once_cell::sync::Lazy;
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::Deserialize;

use business::domain::shared::value_objects::UserId;

use crate::config::identity_config::IdentityConfig;

const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("auth.certs_fetch_failed")]
    CertsFetch(#[source] reqwest::Error),
    #[error("auth.cert_decode_failed")]
    CertDecode(#[source] jsonwebtoken::errors::Error),
    #[error("auth.invalid_token_header")]
    InvalidHeader(#[source] jsonwebtoken::errors::Error),
    #[error("auth.missing_kid")]
    MissingKid,
    #[error("auth.unknown_kid")]
    UnknownKid,
    #[error("auth.token_validation_failed")]
    Validation(#[source] jsonwebtoken::errors::Error),
    #[error("auth.cache_poisoned")]
    CachePoisoned,
}

#[derive(Debug, Deserialize)]
struct SessionClaims {
    sub: String,
}

struct CachedKeys {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

static KEYS_CACHE: Lazy<RwLock<Option<CachedKeys>>> = Lazy::new(|| RwLock::new(None));

async fn fetch_signing_keys(
    config: &IdentityConfig,
) -> Result<HashMap<String, DecodingKey>, TokenError> {
    let certificates: HashMap<String, String> = reqwest::get(&config.certs_url)
        .await
        .map_err(TokenError::CertsFetch)?
        .json()
        .await
        .map_err(TokenError::CertsFetch)?;

    certificates
        .into_iter()
        .map(|(kid, pem)| {
            DecodingKey::from_rsa_pem(pem.as_bytes())
                .map(|key| (kid, key))
                .map_err(TokenError::CertDecode)
        })
        .collect()
}

/// Signing keys from the cache, refetched once they are older than an hour.
async fn signing_keys(config: &IdentityConfig) -> Result<HashMap<String, DecodingKey>, TokenError> {
    {
        let cache = KEYS_CACHE.read().map_err(|_| TokenError::CachePoisoned)?;
        if let Some(cached) = cache.as_ref()
            && cached.fetched_at.elapsed() < CACHE_TTL
        {
            return Ok(cached.keys.clone());
        }
    }

    let keys = fetch_signing_keys(config).await?;
    tracing::debug!(count = keys.len(), "Refreshed identity signing keys");

    let mut cache = KEYS_CACHE.write().map_err(|_| TokenError::CachePoisoned)?;
    *cache = Some(CachedKeys {
        keys: keys.clone(),
        fetched_at: Instant::now(),
    });

    Ok(keys)
}

/// Validates an RS256 session token and returns its subject.
fn verify_token(
    token: &str,
    keys: &HashMap<String, DecodingKey>,
    config: &IdentityConfig,
) -> Result<UserId, TokenError> {
    let header = decode_header(token).map_err(TokenError::InvalidHeader)?;
    let kid = header.kid.ok_or(TokenError::MissingKid)?;
    let decoding_key = keys.get(&kid).ok_or(TokenError::UnknownKid)?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[&config.project_id]);
    validation.set_issuer(&[config.issuer()]);
    validation.validate_exp = true;

    let token_data = decode::<SessionClaims>(token, decoding_key, &validation)
        .map_err(TokenError::Validation)?;

    Ok(UserId::new(token_data.claims.sub))
}

/// Session bearer token issued by the identity provider.
///
/// Resolves to the authenticated owner; requests without a valid token are
/// rejected with 401 before the handler runs.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "session_checker")]
pub struct SessionBearer(pub UserId);

async fn session_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<UserId> {
    let Some(config) = req.data::<IdentityConfig>() else {
        tracing::error!("Identity configuration missing from request data");
        return None;
    };

    let keys = match signing_keys(config).await {
        Ok(keys) => keys,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load identity signing keys");
            return None;
        }
    };

    match verify_token(&bearer.token, &keys, config) {
        Ok(user_id) => Some(user_id),
        Err(e) => {
            tracing::warn!(error = %e, "Session token rejected");
            None
        }
    }
}
