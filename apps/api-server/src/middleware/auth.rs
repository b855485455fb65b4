//! Bearer-token identity extraction.
//!
//! Extraction never rejects a request on its own: the GraphQL layer receives
//! `Option<Identity>` and the mutation gate decides.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};
use std::sync::Arc;

use postboard_core::ports::{AuthError, TokenClaims, TokenService};

/// Authenticated caller.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: uuid::Uuid,
    pub email: String,
    pub roles: Vec<String>,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            roles: claims.roles,
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Result<&str, AuthError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))
}

/// Resolve the caller from the `Authorization` header.
pub fn identity(req: &HttpRequest) -> Result<Identity, AuthError> {
    let Some(token_service) = req.app_data::<web::Data<Arc<dyn TokenService>>>() else {
        tracing::error!("TokenService not found in app data");
        return Err(AuthError::InvalidToken("Server configuration error".to_string()));
    };

    let token = bearer_token(req)?;
    token_service.validate_token(token).map(Identity::from)
}

/// Optional identity extractor - doesn't fail if not authenticated.
pub struct OptionalIdentity(pub Option<Identity>);

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match identity(req) {
            Ok(identity) => ready(Ok(OptionalIdentity(Some(identity)))),
            Err(AuthError::MissingAuth) => ready(Ok(OptionalIdentity(None))),
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring unusable credentials");
                ready(Ok(OptionalIdentity(None)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use postboard_infra::auth::{JwtConfig, JwtTokenService};

    use super::*;

    fn token_service() -> Arc<dyn TokenService> {
        Arc::new(JwtTokenService::new(JwtConfig {
            secret: "auth-test-secret".to_string(),
            expiration_hours: 1,
            issuer: "postboard-test".to_string(),
        }))
    }

    #[test]
    fn test_bearer_token_parsing() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def"))
            .to_http_request();
        assert_eq!(bearer_token(&req).unwrap(), "abc.def");

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic Zm9v"))
            .to_http_request();
        assert!(matches!(bearer_token(&req), Err(AuthError::InvalidToken(_))));

        let req = TestRequest::default().to_http_request();
        assert!(matches!(bearer_token(&req), Err(AuthError::MissingAuth)));
    }

    #[test]
    fn test_identity_from_valid_token() {
        let tokens = token_service();
        let user_id = uuid::Uuid::new_v4();
        let token = tokens
            .generate_token(user_id, "writer@example.com", vec!["user".to_string()])
            .unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(tokens))
            .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
            .to_http_request();

        let identity = identity(&req).unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email, "writer@example.com");
        assert_eq!(identity.roles, vec!["user"]);
    }

    #[test]
    fn test_identity_errors() {
        let req = TestRequest::default()
            .app_data(web::Data::new(token_service()))
            .to_http_request();
        assert!(matches!(identity(&req), Err(AuthError::MissingAuth)));

        let req = TestRequest::default()
            .app_data(web::Data::new(token_service()))
            .insert_header((header::AUTHORIZATION, "Bearer not.a.token"))
            .to_http_request();
        assert!(matches!(identity(&req), Err(AuthError::InvalidToken(_))));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def"))
            .to_http_request();
        assert!(matches!(identity(&req), Err(AuthError::InvalidToken(_))));
    }

    #[actix_rt::test]
    async fn test_optional_identity_never_rejects() {
        let req = TestRequest::default()
            .app_data(web::Data::new(token_service()))
            .insert_header((header::AUTHORIZATION, "Bearer forged"))
            .to_http_request();

        let extracted = OptionalIdentity::extract(&req).await.unwrap();

        assert!(extracted.0.is_none());
    }
}
