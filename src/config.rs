//! Application configuration.
//!
//! Values are layered, later sources overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. `lexfolio.toml` in the working directory (optional)
//! 3. `LEXFOLIO_*` environment variables, `__` separating nested keys
//!
//! | Key                          | Env var                              | Default                              |
//! |------------------------------|--------------------------------------|--------------------------------------|
//! | `mongodb.uri`                | `LEXFOLIO_MONGODB__URI`              | `mongodb://localhost:27017`          |
//! | `mongodb.database`           | `LEXFOLIO_MONGODB__DATABASE`         | `lexfolio`                           |
//! | `s3.bucket`                  | `LEXFOLIO_S3__BUCKET`                | `lexfolio-media`                     |
//! | `s3.region`                  | `LEXFOLIO_S3__REGION`                | `us-east-1`                          |
//! | `s3.endpoint`                | `LEXFOLIO_S3__ENDPOINT`              | none                                 |
//! | `s3.force_path_style`        | `LEXFOLIO_S3__FORCE_PATH_STYLE`      | `false`                              |
//! | `admin.email`                | `LEXFOLIO_ADMIN__EMAIL`              | required                             |
//! | `admin.password`             | `LEXFOLIO_ADMIN__PASSWORD`           | required                             |
//! | `admin.session_secret`       | `LEXFOLIO_ADMIN__SESSION_SECRET`     | required                             |
//! | `admin.session_ttl_hours`    | `LEXFOLIO_ADMIN__SESSION_TTL_HOURS`  | `12`                                 |
//! | `site.base_url`              | `LEXFOLIO_SITE__BASE_URL`            | `https://www.decodelawwithgauri.com` |
//! | `site.public_dir`            | `LEXFOLIO_SITE__PUBLIC_DIR`          | `public`                             |
//! | `seed_demo_data`             | `LEXFOLIO_SEED_DEMO_DATA`            | `false`                              |

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

const CONFIG_FILE: &str = "lexfolio";
const ENV_PREFIX: &str = "LEXFOLIO";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongodb: MongoSettings,
    pub s3: S3Settings,
    pub admin: AdminSettings,
    pub site: SiteSettings,
    pub seed_demo_data: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    #[serde(default)]
    pub endpoint: Option<String>,
    pub force_path_style: bool,
}

/// Credentials and session parameters for the admin area.
#[derive(Clone, Deserialize)]
pub struct AdminSettings {
    pub email: String,
    pub password: String,
    pub session_secret: String,
    pub session_ttl_hours: u64,
}

impl std::fmt::Debug for AdminSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSettings")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("session_secret", &"<redacted>")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    pub base_url: String,
    pub public_dir: String,
}

impl AppConfig {
    /// Load configuration from `.env`, `lexfolio.toml` and the environment.
    pub fn load() -> Result<Self, AppError> {
        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();

        let builder = Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, AppError> {
        Config::builder()
            .set_default("mongodb.uri", "mongodb://localhost:27017")?
            .set_default("mongodb.database", "lexfolio")?
            .set_default("s3.bucket", "lexfolio-media")?
            .set_default("s3.region", "us-east-1")?
            .set_default("s3.force_path_style", false)?
            .set_default("admin.session_ttl_hours", 12)?
            .set_default("site.base_url", "https://www.decodelawwithgauri.com")?
            .set_default("site.public_dir", "public")?
            .set_default("seed_demo_data", false)
            .map_err(AppError::from)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), AppError> {
        for (key, value) in [
            ("admin.email", &self.admin.email),
            ("admin.password", &self.admin.password),
            ("admin.session_secret", &self.admin.session_secret),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Config(format!("{key} must not be empty")));
            }
        }
        if self.admin.session_ttl_hours == 0 {
            return Err(AppError::Config(
                "admin.session_ttl_hours must be positive".into(),
            ));
        }
        Ok(())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
