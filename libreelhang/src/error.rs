//! Error types for Reelhang

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReelhangError>;

#[derive(Error, Debug)]
pub enum ReelhangError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ReelhangError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReelhangError::InvalidInput(_) => 3,
            ReelhangError::Catalog(_) => 1,
            ReelhangError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode catalog body: {0}")]
    Decode(String),

    #[error("Catalog endpoint returned status {0}")]
    Status(u16),

    #[error("Catalog returned no movies")]
    EmptyCatalog,

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = ReelhangError::InvalidInput("Empty candidate list".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_catalog_error() {
        let error = ReelhangError::Catalog(CatalogError::Status(503));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_config_error() {
        let config_error = ConfigError::MissingField("catalog.endpoint".to_string());
        let error = ReelhangError::Config(config_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = ReelhangError::InvalidInput("candidate list is empty".to_string());
        let message = format!("{}", error);
        assert_eq!(message, "Invalid input: candidate list is empty");
    }

    #[test]
    fn test_error_message_formatting_catalog_status() {
        let error = ReelhangError::Catalog(CatalogError::Status(404));
        let message = format!("{}", error);
        assert_eq!(message, "Catalog error: Catalog endpoint returned status 404");
    }

    #[test]
    fn test_error_message_formatting_catalog_decode() {
        let error = ReelhangError::Catalog(CatalogError::Decode(
            "expected array or results object".to_string(),
        ));
        let message = format!("{}", error);
        assert!(message.contains("Failed to decode catalog body"));
        assert!(message.contains("expected array or results object"));
    }

    #[test]
    fn test_error_message_formatting_empty_catalog() {
        let error = ReelhangError::Catalog(CatalogError::EmptyCatalog);
        assert_eq!(
            format!("{}", error),
            "Catalog error: Catalog returned no movies"
        );
    }

    #[test]
    fn test_error_message_formatting_catalog_unavailable() {
        let error = ReelhangError::Catalog(CatalogError::Unavailable(
            "connection refused".to_string(),
        ));
        assert_eq!(
            format!("{}", error),
            "Catalog error: Catalog unavailable: connection refused"
        );
    }

    #[test]
    fn test_error_message_formatting_config() {
        let config_error = ConfigError::MissingField("catalog.endpoint".to_string());
        let error = ReelhangError::Config(config_error);
        let message = format!("{}", error);
        assert_eq!(
            message,
            "Configuration error: Missing required field: catalog.endpoint"
        );
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("test".to_string());
        let reelhang_error: ReelhangError = config_error.into();

        match reelhang_error {
            ReelhangError::Config(_) => {}
            _ => panic!("Expected ReelhangError::Config"),
        }
    }

    #[test]
    fn test_error_conversion_from_catalog_error() {
        let catalog_error = CatalogError::EmptyCatalog;
        let reelhang_error: ReelhangError = catalog_error.into();

        match reelhang_error {
            ReelhangError::Catalog(_) => {}
            _ => panic!("Expected ReelhangError::Catalog"),
        }
    }

    #[test]
    fn test_config_error_read_error_formatting() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let config_error = ConfigError::ReadError(io_error);
        let message = format!("{}", config_error);
        assert!(message.contains("Failed to read config file"));
    }

    #[test]
    fn test_exit_code_consistency() {
        let invalid1 = ReelhangError::InvalidInput("a".to_string());
        let invalid2 = ReelhangError::InvalidInput("b".to_string());
        assert_eq!(invalid1.exit_code(), invalid2.exit_code());
        assert_eq!(invalid1.exit_code(), 3);

        let catalog = ReelhangError::Catalog(CatalogError::EmptyCatalog);
        let config = ReelhangError::Config(ConfigError::MissingField("x".to_string()));
        assert_eq!(catalog.exit_code(), 1);
        assert_eq!(config.exit_code(), 1);
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_err() -> Result<String> {
            Err(ReelhangError::InvalidInput("test".to_string()))
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }

    #[test]
    fn test_error_debug_output() {
        let error = ReelhangError::Catalog(CatalogError::Status(500));
        let debug_output = format!("{:?}", error);
        assert!(debug_output.contains("Catalog"));
        assert!(debug_output.contains("Status"));
    }
}
