use crate::config::{ConfigError, ConfigErrors};
use thiserror::Error;

/// Top-level error type for the dragon-cfg library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("configuration errors:\n{0}")]
    Collected(#[from] ConfigErrors),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, MapResolver};

    fn load_port(config: &mut Config) -> Result<i64, Error> {
        Ok(config.get_int("port")?)
    }

    fn check(config: &Config) -> Result<(), Error> {
        config.ensure_no_errors()?;
        Ok(())
    }

    #[test]
    fn test_single_lookup_converts() {
        let mut config = Config::new("app", MapResolver::new());
        let err = load_port(&mut config).unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        assert_eq!(
            err.to_string(),
            "configuration error: config key app.port does not exist"
        );
    }

    #[test]
    fn test_batch_check_converts() {
        let mut config = Config::new("app", MapResolver::new().with(["app", "port"], "80"));
        assert_eq!(load_port(&mut config).unwrap(), 80);
        assert!(check(&config).is_ok());

        let _ = config.get_bool("debug");
        let err = check(&config).unwrap_err();
        assert!(matches!(err, Error::Collected(ref errors) if errors.len() == 1));
    }
}
