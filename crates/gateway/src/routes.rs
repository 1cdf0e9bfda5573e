//! Route configuration.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    auth_handler, course_routes, enrollment_routes, health_routes, student_routes, user_routes,
};
use crate::middleware::auth_middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/v1", v1_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn v1_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/auth/logout", post(auth_handler::logout))
        .route("/auth/me", get(auth_handler::me))
        .nest("/users", user_routes())
        .nest("/students", student_routes())
        .nest("/courses", course_routes())
        .nest("/enrollments", enrollment_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/auth/login", post(auth_handler::login))
        .merge(protected)
}
