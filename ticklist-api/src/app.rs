/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use ticklist_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = ticklist_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use ticklist_shared::service::{task::TaskService, user::UserService};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The pool
/// handle and services are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by health and auth)
    pub db: PgPool,

    /// Task business service
    pub tasks: TaskService,

    /// User business service
    pub users: UserService,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            tasks: TaskService::new(db.clone()),
            users: UserService::new(db.clone()),
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                         # Health check (public)
/// └── /api/
///     ├── /tasks/                     # Task CRUD + list views
///     │   ├── GET    /all
///     │   ├── GET    /:id
///     │   ├── GET    /title/:title
///     │   ├── POST   /add             # form-encoded, redirects
///     │   ├── GET    /update/:id      # edit-form payload
///     │   ├── POST   /update          # form-encoded, redirects
///     │   ├── POST   /complete/:id
///     │   ├── DELETE /delete/:id
///     │   └── GET    /pending|completed|today
///     └── /users/
///         ├── POST   /add
///         ├── GET    /all
///         ├── GET    /:id | /username/:username | /email/:email
///         ├── PUT    /update
///         └── DELETE /delete
/// ```
///
/// When `REQUIRE_AUTH` is enabled, the /api groups are wrapped in the HTTP
/// Basic authentication middleware; /health stays public either way.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let task_routes = Router::new()
        .route("/all", get(routes::tasks::all_tasks))
        .route("/pending", get(routes::tasks::pending_tasks))
        .route("/completed", get(routes::tasks::completed_tasks))
        .route("/today", get(routes::tasks::today_tasks))
        .route("/title/:title", get(routes::tasks::task_by_title))
        .route("/add", post(routes::tasks::add_task))
        .route("/update/:id", get(routes::tasks::edit_task))
        .route("/update", post(routes::tasks::update_task))
        .route("/complete/:id", post(routes::tasks::complete_task))
        .route("/delete/:id", delete(routes::tasks::delete_task))
        .route("/:id", get(routes::tasks::task_by_id));

    let user_routes = Router::new()
        .route("/add", post(routes::users::add_user))
        .route("/all", get(routes::users::all_users))
        .route("/username/:username", get(routes::users::user_by_username))
        .route("/email/:email", get(routes::users::user_by_email))
        .route("/update", put(routes::users::update_user))
        .route("/delete", delete(routes::users::delete_user))
        .route("/:id", get(routes::users::user_by_id));

    let mut api_routes = Router::new()
        .nest("/tasks", task_routes)
        .nest("/users", user_routes);

    if state.config.api.require_auth {
        api_routes = api_routes.layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::basic_auth,
        ));
    }

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
    };

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
