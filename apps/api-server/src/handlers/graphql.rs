//! GraphQL endpoint and GraphiQL page.

use actix_web::{HttpResponse, web};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing::Instrument;

use crate::graphql::AppSchema;
use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /graphql
///
/// The caller's identity (if any) travels as request data; the mutation gate
/// reads it from there.
pub async fn graphql(
    schema: web::Data<AppSchema>,
    identity: OptionalIdentity,
    request_id: RequestId,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let span = tracing::info_span!(
        "graphql",
        request_id = %request_id.as_str(),
        authenticated = identity.0.is_some(),
    );

    let request = request.into_inner().data(identity.0);
    schema.execute(request).instrument(span).await.into()
}

/// GET /graphql
pub async fn graphiql(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    if !state.graphiql_enabled {
        return Err(AppError::NotFound("GraphiQL is disabled".to_string()));
    }

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::header, test};
    use serde_json::{Value, json};

    use postboard_core::ports::TokenService;
    use postboard_core::{PostService, ServiceConfig};
    use postboard_infra::InMemoryPostRepository;
    use postboard_infra::auth::{JwtConfig, JwtTokenService};

    use super::*;
    use crate::graphql::build_schema;
    use crate::handlers::configure_routes;
    use crate::observability::RequestIdMiddleware;
    use crate::state::Storage;

    fn test_state() -> AppState {
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "handler-test-secret".to_string(),
            expiration_hours: 1,
            issuer: "postboard-test".to_string(),
        }));

        AppState {
            posts: PostService::new(
                Arc::new(InMemoryPostRepository::new()),
                ServiceConfig::default(),
            ),
            token_service,
            storage: Storage::Memory,
            graphiql_enabled: false,
        }
    }

    fn bearer(state: &AppState) -> String {
        let token = state
            .token_service
            .generate_token(uuid::Uuid::new_v4(), "writer@example.com", vec![])
            .unwrap();
        format!("Bearer {token}")
    }

    macro_rules! app {
        ($state:expr) => {{
            let state: AppState = $state;
            test::init_service(
                App::new()
                    .wrap(RequestIdMiddleware)
                    .app_data(web::Data::new(build_schema(state.posts.clone())))
                    .app_data(web::Data::new(state.token_service.clone()))
                    .app_data(web::Data::new(state))
                    .configure(configure_routes),
            )
            .await
        }};
    }

    const CREATE: &str = r#"mutation {
        createPost(createPostInput: { title: "Hello", text: "World" }) {
            code success message post { id title text }
        }
    }"#;

    #[actix_rt::test]
    async fn test_mutation_with_bearer_token_runs() {
        let state = test_state();
        let auth = bearer(&state);
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/graphql")
            .insert_header((header::AUTHORIZATION, auth))
            .set_json(json!({ "query": CREATE }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let created = &body["data"]["createPost"];
        assert_eq!(created["code"], 200);
        assert_eq!(created["success"], true);
        assert_eq!(created["post"]["id"], "1");
        assert_eq!(created["post"]["title"], "Hello");
    }

    #[actix_rt::test]
    async fn test_mutation_without_token_is_rejected() {
        let state = test_state();
        let posts = state.posts.clone();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": CREATE }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["errors"][0]["message"], "Not authenticated");
        assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
        assert!(posts.posts().await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_forged_token_is_rejected() {
        let state = test_state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/graphql")
            .insert_header((header::AUTHORIZATION, "Bearer not.a.token"))
            .set_json(json!({ "query": CREATE }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
    }

    #[actix_rt::test]
    async fn test_queries_are_public() {
        let state = test_state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": "{ posts { id } }" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["posts"], json!([]));
        assert!(body.get("errors").is_none());
    }

    #[actix_rt::test]
    async fn test_graphiql_disabled_returns_404() {
        let state = test_state();
        let app = app!(state);

        let res = test::call_service(&app, test::TestRequest::get().uri("/graphql").to_request())
            .await;

        assert_eq!(res.status(), 404);
    }

    #[actix_rt::test]
    async fn test_health_reports_memory_storage() {
        let state = test_state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }

    #[actix_rt::test]
    async fn test_unknown_route_is_problem_json() {
        let state = test_state();
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri("/nope")
            .insert_header(("x-request-id", "trace-me"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 404);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["request_id"], "trace-me");
    }
}
