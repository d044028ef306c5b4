use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Subject of the session token; owner of every item the caller sees
    pub user_id: String,
}

/// Session introspection. Sign-in and sign-out happen against the identity
/// provider; this only reports who the presented token belongs to.
pub struct SessionApi;

#[OpenApi]
impl SessionApi {
    /// Current principal
    #[oai(path = "/session", method = "get", tag = "ApiTags::Session")]
    async fn current(&self, auth: SessionBearer) -> Json<SessionResponse> {
        Json(SessionResponse {
            user_id: auth.0.to_string(),
        })
    }
}
