use crate::application::booking::sessions::SessionLimits;
use crate::domain::scheduler::DelaySettings;
use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub delays: DelaySettings,
    pub schedule: ScheduleConfig,
    pub bookings: SessionLimits,
    pub cors_allowed_origins: Vec<String>,
    pub rate_limit_per_minute: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleConfig {
    pub row_height_px: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: IpAddr::from([0, 0, 0, 0]),
                port: 3000,
            },
            delays: DelaySettings::default(),
            schedule: ScheduleConfig {
                row_height_px: 60.0,
            },
            bookings: SessionLimits::default(),
            cors_allowed_origins: Vec::new(),
            rate_limit_per_minute: 60,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}", name)),
        _ => Ok(default),
    }
}

fn millis_var(name: &str, default: Duration) -> Result<Duration> {
    parse_var(name, default.as_millis() as u64).map(Duration::from_millis)
}

fn check_row_height(row_height_px: f64) -> Result<f64> {
    if !(row_height_px.is_finite() && row_height_px > 0.0) {
        anyhow::bail!("SCHEDULE_ROW_HEIGHT_PX must be a positive number");
    }
    Ok(row_height_px)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        let host = parse_var("SERVER_HOST", defaults.server.host)?;
        let port = parse_var("SERVER_PORT", defaults.server.port)?;

        let delays = DelaySettings {
            payment_processing: millis_var(
                "PAYMENT_PROCESSING_DELAY_MS",
                defaults.delays.payment_processing,
            )?,
            booking_acknowledgement: millis_var(
                "BOOKING_ACK_DELAY_MS",
                defaults.delays.booking_acknowledgement,
            )?,
            mutation: millis_var("MUTATION_DELAY_MS", defaults.delays.mutation)?,
        };

        let row_height_px = check_row_height(parse_var(
            "SCHEDULE_ROW_HEIGHT_PX",
            defaults.schedule.row_height_px,
        )?)?;

        let bookings = SessionLimits {
            idle_timeout: parse_var(
                "BOOKING_IDLE_TIMEOUT_SECS",
                defaults.bookings.idle_timeout.as_secs(),
            )
            .map(Duration::from_secs)?,
            max_open: parse_var("MAX_OPEN_BOOKINGS", defaults.bookings.max_open)?,
        };
        if bookings.idle_timeout.is_zero() || bookings.max_open == 0 {
            anyhow::bail!("BOOKING_IDLE_TIMEOUT_SECS and MAX_OPEN_BOOKINGS must be at least 1");
        }

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty() && *origin != "*")
            .map(String::from)
            .collect();

        let rate_limit_per_minute =
            parse_var("RATE_LIMIT_PER_MINUTE", defaults.rate_limit_per_minute)?;
        if rate_limit_per_minute == 0 {
            anyhow::bail!("RATE_LIMIT_PER_MINUTE must be at least 1");
        }

        Ok(Config {
            server: ServerConfig { host, port },
            delays,
            schedule: ScheduleConfig { row_height_px },
            bookings,
            cors_allowed_origins,
            rate_limit_per_minute,
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server.host, self.server.port)
    }
}
