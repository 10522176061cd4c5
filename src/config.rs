use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    /// Sets the `Secure` attribute on the session cookie.
    pub cookie_secure: bool,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        // No fallback secret: a guessable default would let anyone mint sessions.
        let secret = var("JWT_SECRET")
            .filter(|s| !s.trim().is_empty())
            .context("JWT_SECRET must be set to a non-empty value")?;

        let ttl_minutes = match var("JWT_TTL_MINUTES") {
            Some(v) => v
                .parse::<i64>()
                .ok()
                .filter(|m| *m > 0)
                .with_context(|| format!("JWT_TTL_MINUTES must be a positive integer, got {v:?}"))?,
            None => 60,
        };

        let jwt = JwtConfig {
            secret,
            issuer: var("JWT_ISSUER").unwrap_or_else(|| "taskboard".into()),
            audience: var("JWT_AUDIENCE").unwrap_or_else(|| "taskboard-users".into()),
            ttl_minutes,
        };

        let cookie_secure = var("APP_ENV")
            .map(|env| env.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let port = match var("APP_PORT") {
            Some(p) => p
                .parse::<u16>()
                .with_context(|| format!("APP_PORT must be a port number, got {p:?}"))?,
            None => 8080,
        };

        Ok(Self {
            database_url,
            jwt,
            cookie_secure,
            host: var("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_optional_vars_missing() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/tasks"),
            ("JWT_SECRET", "s3cret"),
        ]))
        .expect("config should load");

        assert_eq!(cfg.jwt.ttl_minutes, 60);
        assert_eq!(cfg.jwt.issuer, "taskboard");
        assert_eq!(cfg.jwt.audience, "taskboard-users");
        assert!(!cfg.cookie_secure);
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn missing_secret_fails_startup() {
        let err = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/tasks")]))
            .unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn blank_secret_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/tasks"),
            ("JWT_SECRET", "   "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn production_env_enables_secure_cookie() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/tasks"),
            ("JWT_SECRET", "s3cret"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();
        assert!(cfg.cookie_secure);
    }

    #[test]
    fn rejects_non_positive_ttl() {
        let res = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/tasks"),
            ("JWT_SECRET", "s3cret"),
            ("JWT_TTL_MINUTES", "0"),
        ]));
        assert!(res.is_err());
    }
}
