//! Integration tests for layered configuration loading.

use clientele_config::{load_config, ConfigError, LogFormat};
use figment::Jail;

#[test]
fn defaults_without_file_or_env() {
    Jail::expect_with(|_jail| {
        let config = load_config(None).map_err(|e| e.to_string())?;
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.database_path, "data/customers.db");
        assert!(config.storage.seed_sample_data);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Plain);
        Ok(())
    });
}

#[test]
fn file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "clientele.toml",
            r#"
                [server]
                port = 9000

                [storage]
                database_path = "/tmp/crm.db"
                seed_sample_data = false

                [logging]
                format = "json"
            "#,
        )?;
        let config = load_config(Some("clientele.toml")).map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.database_path, "/tmp/crm.db");
        assert!(!config.storage.seed_sample_data);
        assert_eq!(config.logging.format, LogFormat::Json);
        Ok(())
    });
}

#[test]
fn prefixed_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("clientele.toml", "[server]\nport = 9000\n")?;
        jail.set_env("CLIENTELE_SERVER__PORT", "9100");
        jail.set_env("CLIENTELE_LOGGING__LEVEL", "debug");
        let config = load_config(Some("clientele.toml")).map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn bare_port_variable_wins() {
    Jail::expect_with(|jail| {
        jail.set_env("CLIENTELE_SERVER__PORT", "9100");
        jail.set_env("PORT", "3001");
        let config = load_config(None).map_err(|e| e.to_string())?;
        assert_eq!(config.server.port, 3001);
        Ok(())
    });
}

#[test]
fn invalid_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("CLIENTELE_LOGGING__LEVEL", "chatty");
        match load_config(None) {
            Err(ConfigError::Invalid(msg)) => assert!(msg.contains("chatty")),
            other => panic!("expected invalid config, got {other:?}"),
        }
        Ok(())
    });
}

#[test]
fn unknown_section_fails_to_load() {
    Jail::expect_with(|jail| {
        jail.create_file("clientele.toml", "[sandbox]\nfuel = 1\n")?;
        assert!(matches!(
            load_config(Some("clientele.toml")),
            Err(ConfigError::Load(_))
        ));
        Ok(())
    });
}

#[test]
fn config_serde_roundtrip() {
    let config = clientele_config::ClienteleConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let back: clientele_config::ClienteleConfig =
        serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.server.port, config.server.port);
    assert_eq!(back.storage.database_path, config.storage.database_path);
}
