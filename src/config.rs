use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,

    /// Allowed CORS origins. A single `*` entry permits any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            cors_origins: parse_cors_origins(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            ),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let origins = parse_cors_origins("http://localhost:3000, https://mood.example.com");
        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://mood.example.com".to_string()
            ]
        );
    }

    #[test]
    fn cors_origins_default_wildcard_survives() {
        assert_eq!(parse_cors_origins("*"), vec!["*".to_string()]);
    }

    #[test]
    fn cors_origins_empty_entries_are_dropped() {
        let origins = parse_cors_origins("http://localhost:3000,,  ,");
        assert_eq!(origins, vec!["http://localhost:3000".to_string()]);
    }
}
