use crate::app::AppError;
use crate::domain::timezone::DisplayTimezone;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub http_bind: String,
    pub http_workers: Option<usize>,
    pub display_timezone: DisplayTimezone,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        accept_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let display_timezone = match non_empty(&lookup, "TZ") {
            Some(raw) => DisplayTimezone::parse(&raw)
                .map_err(|error| AppError::config(format!("TZ is invalid: {error}")))?,
            None => DisplayTimezone::utc(),
        };

        let http_workers = parse_optional::<usize, _>(&lookup, "HTTP_WORKERS")?;
        if http_workers == Some(0) {
            return Err(AppError::config("HTTP_WORKERS must be greater than zero"));
        }

        Ok(Self {
            db_path: non_empty(&lookup, "DB_PATH")
                .unwrap_or_else(|| "/var/lib/teslamate/teslamate.db".to_string()),
            http_bind: non_empty(&lookup, "HTTP_BIND").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            http_workers,
            display_timezone,
            log_level: non_empty(&lookup, "LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn accept_dotenv(result: Result<(), dotenvy::Error>) -> Result<(), AppError> {
    match result {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(error)) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(AppError::config(format!(".env could not be loaded: {error}"))),
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_optional<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{key} must be a valid number"))),
        None => Ok(None),
    }
}
