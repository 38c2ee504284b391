use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use todo_api_rust::auth::JwtService;
use todo_api_rust::config;
use todo_api_rust::database;
use todo_api_rust::handlers::{protected, public};
use todo_api_rust::middleware::jwt_auth_middleware;
use todo_api_rust::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting todo API in {:?} mode", config.environment);

    // The signing secret is a startup precondition, not a per-request concern
    let jwt = JwtService::new(&config.security.jwt_secret)
        .unwrap_or_else(|_| panic!("JWT_SECRET must be set to a non-empty value"));

    let pool = database::connect_pool(&config.database)
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    sqlx::migrate!()
        .run(&pool)
        .await
        .unwrap_or_else(|e| panic!("failed to run migrations: {}", e));

    let app = app(AppState::new(pool, jwt));

    // Allow tests or deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Todo API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_routes())
        // Protected routes behind the identity guard
        .merge(protected_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use public::auth;

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use protected::{profile, todos};

    Router::new()
        .route("/profile", get(profile::get_profile))
        .route("/todos", post(todos::create_todo).get(todos::list_todos))
        .route("/todos/stats", get(todos::get_stats))
        .route("/todos/categories", get(todos::get_categories))
        .route(
            "/todos/:id",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/todos/:id/toggle", patch(todos::toggle_complete))
        .route("/todos/bulk-delete", post(todos::bulk_delete))
        .route("/todos/bulk-complete", post(todos::bulk_complete))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Todo API (Rust)",
        "version": version,
        "endpoints": {
            "health": "/health (public)",
            "auth": "/auth/register, /auth/login (public)",
            "profile": "/profile (protected)",
            "todos": "/todos[/:id] (protected)",
            "bulk": "/todos/bulk-delete, /todos/bulk-complete (protected)",
            "stats": "/todos/stats, /todos/categories (protected)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match database::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
