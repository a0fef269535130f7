use anyhow::Context;
use storage::Database;
use storage::services::public_id::PublicIdCodec;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::users::handlers::send_otp,
        features::users::handlers::register,
        features::scores::handlers::save_score,
        features::ranking::handlers::get_scorecard,
        features::ranking::handlers::get_weekly_score,
    ),
    components(
        schemas(
            storage::dto::user::SendOtpRequest,
            storage::dto::user::RegisterRequest,
            storage::dto::user::RegisterResponse,
            storage::dto::score::SaveScoreRequest,
            storage::dto::ranking::ScorecardResponse,
            storage::dto::ranking::WeeklyScoreEntry,
        )
    ),
    tags(
        (name = "users", description = "Registration and OTP endpoints"),
        (name = "scores", description = "Score submission endpoints"),
        (name = "ranking", description = "Scorecard and weekly ranking endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting quiz ranking API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        ids: PublicIdCodec::new(&config.user_id_secret),
    };

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = axum::Router::new()
        .merge(features::users::routes::routes())
        .merge(features::scores::routes::routes())
        .merge(features::ranking::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
