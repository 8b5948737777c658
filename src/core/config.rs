use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: Option<DatabaseConfig>,
    pub auth: AuthConfig,
    pub swagger: SwaggerConfig,
    pub map: MapConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Static API tokens accepted on write endpoints
#[derive(Clone, Debug, Default)]
pub struct AuthConfig {
    pub api_tokens: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Map layout settings
#[derive(Debug, Clone)]
pub struct MapConfig {
    pub title: String,
    pub subtitle: String,
    /// Basemap names handed to the map widget, in display order
    pub basemaps: Vec<String>,
    /// Directory holding the national park boundary GeoJSON files
    pub resources_dir: PathBuf,
    /// Public URL prefix of the animal logo and pin images
    pub images_path: String,
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Generate one demo sighting per animal on first initialisation
    pub random_sightings: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env(),
            swagger: SwaggerConfig::from_env(),
            map: MapConfig::from_env(),
            seed: SeedConfig::from_env()?,
        })
    }
}

fn comma_separated(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let cors_allowed_origins =
            comma_separated(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string()));

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    /// Returns `None` when DATABASE_URL is unset; the service then runs on the in-memory store.
    pub fn from_env() -> Result<Option<Self>, String> {
        let Some(url) = env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Some(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        }))
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            api_tokens: comma_separated(&env::var("API_TOKENS").unwrap_or_default()),
        }
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Wild Atlas API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "Interactive wildlife sighting tracker".to_string());

        Self {
            username,
            password,
            title,
            version,
            description,
        }
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl MapConfig {
    const DEFAULT_BASEMAPS: &'static str = "OpenStreetMap,ESRI";
    const DEFAULT_IMAGES_PATH: &'static str = "/static/wildatlas/images";

    pub fn from_env() -> Self {
        let title = env::var("MAP_TITLE").unwrap_or_else(|_| "Wild Atlas".to_string());
        let subtitle = env::var("MAP_SUBTITLE").unwrap_or_else(|_| "Animal Sightings".to_string());
        let basemaps = comma_separated(
            &env::var("MAP_BASEMAPS").unwrap_or_else(|_| Self::DEFAULT_BASEMAPS.to_string()),
        );
        let resources_dir = env::var("RESOURCES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("resources"));
        let images_path = env::var("STATIC_IMAGES_PATH")
            .unwrap_or_else(|_| Self::DEFAULT_IMAGES_PATH.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            title,
            subtitle,
            basemaps,
            resources_dir,
            images_path,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "Wild Atlas".to_string(),
            subtitle: "Animal Sightings".to_string(),
            basemaps: comma_separated(Self::DEFAULT_BASEMAPS),
            resources_dir: PathBuf::from("resources"),
            images_path: Self::DEFAULT_IMAGES_PATH.to_string(),
        }
    }
}

impl SeedConfig {
    pub fn from_env() -> Result<Self, String> {
        let random_sightings = env::var("SEED_RANDOM_SIGHTINGS")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| "SEED_RANDOM_SIGHTINGS must be true or false".to_string())?;

        Ok(Self { random_sightings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated_trims_and_drops_empty() {
        assert_eq!(
            comma_separated(" OpenStreetMap, ESRI ,,"),
            vec!["OpenStreetMap".to_string(), "ESRI".to_string()]
        );
        assert!(comma_separated("").is_empty());
    }

    #[test]
    fn test_swagger_credentials_require_both_parts() {
        let mut swagger = SwaggerConfig {
            username: Some("admin".to_string()),
            password: None,
            title: String::new(),
            version: String::new(),
            description: String::new(),
        };
        assert_eq!(swagger.credentials(), None);

        swagger.password = Some("secret".to_string());
        assert_eq!(swagger.credentials(), Some("admin:secret".to_string()));
    }

    #[test]
    fn test_map_config_default_basemaps() {
        let map = MapConfig::default();
        assert_eq!(map.basemaps, vec!["OpenStreetMap", "ESRI"]);
        assert_eq!(map.images_path, "/static/wildatlas/images");
    }
}
