use std::{env, net::SocketAddr};

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::app::env::Envy;

mod app;
mod transactions;

pub static ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:8080", "http://127.0.0.1:8080"];

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.api_port.unwrap_or(3000);

    let pool = app::db::connect_with_retry(&envy)
        .await
        .expect("failed to connect to database");

    println!("connected to db");

    app::db::init_schema(&pool)
        .await
        .expect("failed to create transactions table");

    // app
    let state = AppState { pool };
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

fn router(state: AppState) -> Router {
    Router::new()
        // transactions
        .route(
            "/transactions",
            get(transactions::controller::get_transactions),
        )
        .route(
            "/transaction",
            post(transactions::controller::create_transaction),
        )
        .route(
            "/transaction/:id",
            get(transactions::controller::get_transaction_by_id),
        )
        .route(
            "/transaction/:id",
            put(transactions::controller::edit_transaction_by_id),
        )
        .route(
            "/transaction/:id",
            delete(transactions::controller::delete_transaction_by_id),
        )
        // layers
        .layer(cors())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.parse::<HeaderValue>().unwrap()),
        ))
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}
