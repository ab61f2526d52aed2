//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use portal_authz::{AuditConfig, AuditLogger, AuthzConfig};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_from_file() {
        let file = write_config(
            r#"
audit:
  max_events: 2
  console_enabled: false
logging:
  level: "portal_authz=debug,warn"
  json: true
"#,
        );

        let config = assert_ok!(AuthzConfig::from_file(file.path()));
        assert_eq!(config.audit.max_events, 2);
        assert!(!config.audit.console_enabled);
        assert!(config.logging.json);

        let audit = AuditLogger::new(config.audit);
        for _ in 0..3 {
            audit.login("u1", None);
        }
        assert_eq!(audit.len(), 2);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = assert_err!(AuthzConfig::from_file(dir.path().join("absent.yaml")));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file_invalid_values() {
        let file = write_config("audit:\n  max_events: 0\n");
        let err = assert_err!(AuthzConfig::from_file(file.path()));
        assert!(err.to_string().contains("max_events"));

        let file = write_config("logging:\n  level: \"portal_authz=shout\"\n");
        assert!(AuthzConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/authz.yaml.example");
        let config = assert_ok!(AuthzConfig::from_file(path));
        assert_eq!(config.audit, AuditConfig::default());
    }

    #[test]
    fn test_file_then_override() {
        let file = write_config("audit:\n  max_events: 10\n");
        let from_file = assert_ok!(AuthzConfig::from_file(file.path()));

        let override_config = AuthzConfig {
            audit: AuditConfig {
                max_events: 20,
                console_enabled: true,
            },
            ..AuthzConfig::default()
        };

        let merged = from_file.merge(override_config);
        assert_eq!(merged.audit.max_events, 20);
    }
}
