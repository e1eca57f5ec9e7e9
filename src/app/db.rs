use std::time::Duration;

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
    PgPool,
};
use tokio_retry::{strategy::FixedInterval, Retry};

use super::env::Envy;

const CONNECT_ATTEMPTS: usize = 10;
const CONNECT_RETRY_DELAY_MILLIS: u64 = 5000;

pub async fn connect_with_retry(envy: &Envy) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::new()
        .host(&envy.db_host)
        .port(envy.db_port)
        .username(&envy.db_user)
        .password(&envy.db_password)
        .database(&envy.db_name)
        .ssl_mode(PgSslMode::Disable);

    let retry_strategy =
        FixedInterval::from_millis(CONNECT_RETRY_DELAY_MILLIS).take(CONNECT_ATTEMPTS - 1);

    Retry::spawn(retry_strategy, || async {
        match PgPoolOptions::new()
            .max_connections(50)
            .idle_timeout(Some(Duration::from_secs(60)))
            .connect_with(options.clone())
            .await
        {
            Ok(pool) => Ok(pool),
            Err(e) => {
                tracing::warn!(
                    %e,
                    "failed to connect to database, retrying in {} seconds",
                    CONNECT_RETRY_DELAY_MILLIS / 1000
                );
                Err(e)
            }
        }
    })
    .await
}

pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let sqlx_result = sqlx::query(
        "
        CREATE TABLE IF NOT EXISTS transactions (
            id SERIAL PRIMARY KEY,
            description TEXT NOT NULL,
            amount NUMERIC(10, 2) NOT NULL,
            type VARCHAR(10) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        ",
    )
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(()),
        Err(e) => Err(e),
    }
}
