use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub nats_url: String,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub run_migrations: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let nats_url =
            std::env::var("NATS_URL").context("Missing environment variable: NATS_URL")?;

        let db_min_conn = env_u32("DB_MIN_CONN", 1)?;
        let db_max_conn = env_u32("DB_MAX_CONN", 5)?;

        let run_migrations = match std::env::var("RUN_MIGRATIONS")
            .unwrap_or_else(|_| "false".to_string())
            .as_str()
        {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'"
                ));
            }
        };

        Ok(Self {
            database_url,
            nats_url,
            db_min_conn,
            db_max_conn,
            run_migrations,
        })
    }
}

fn env_u32(key: &str, default: u32) -> Result<u32> {
    match std::env::var(key) {
        Ok(val) => val
            .parse::<u32>()
            .with_context(|| format!("{key} must be a valid u32 integer")),
        Err(_) => Ok(default),
    }
}
