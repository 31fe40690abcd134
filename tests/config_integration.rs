use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use unw_toefl_portal::config::{AppConfig, LogFormat};

const BIN: &str = "unw-toefl-portal";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        for key in [
            "CONFIG_FILE",
            "SERVER_HOST",
            "SERVER_PORT",
            "ENVIRONMENT",
            "POSTGRES_URL",
            "MAX_CONN",
            "ALLOWED_ORIGINS",
            "TOEFL_SERVER__PORT",
            "TOEFL_CORS__ALLOWED_ORIGINS",
            "TOEFL_PORTAL__BRAND",
        ] {
            env::remove_var(key);
        }
    }
}

fn yaml_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load defaults");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.request_timeout_secs, 15);
    assert_eq!(config.server.shutdown_timeout_secs, 10);
    assert!(config.cors.allows_any());
    assert_eq!(config.database.url, None);
    assert_eq!(config.database.max_connections, 100);
    assert_eq!(config.portal.brand, "UNW TOEFL");
    assert_eq!(config.portal.navigation.len(), 5);
    assert_eq!(config.log_format(), LogFormat::Compact);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("TOEFL_SERVER__PORT", "9090");
        env::set_var("TOEFL_PORTAL__BRAND", "TOEFL Center");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.portal.brand, "TOEFL Center");

    clear_env_vars();
}

#[test]
#[serial]
fn test_backend_env_names() {
    clear_env_vars();
    unsafe {
        env::set_var("TOEFL_SERVER__PORT", "9090");
        env::set_var("SERVER_PORT", "7000");
        env::set_var("ENVIRONMENT", "production");
        env::set_var("POSTGRES_URL", "postgres://toefl@localhost/toefl");
        env::set_var("MAX_CONN", "20");
        env::set_var("ALLOWED_ORIGINS", "http://a.test, http://b.test");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 7000);
    assert!(config.server.is_production());
    assert_eq!(
        config.database.url.as_deref(),
        Some("postgres://toefl@localhost/toefl")
    );
    assert_eq!(config.database.max_connections, 20);
    assert_eq!(config.cors.allowed_origins, ["http://a.test", "http://b.test"]);
    assert!(!config.cors.allows_any());
    assert_eq!(config.log_format(), LogFormat::Json);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_flags_win() {
    clear_env_vars();
    unsafe {
        env::set_var("SERVER_PORT", "7000");
    }

    let config = AppConfig::load_from_args([BIN, "--port", "7100", "--host", "127.0.0.1"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 7100);
    assert_eq!(config.server.host, "127.0.0.1");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let file = yaml_file(
        r#"
server:
  port: 7070
log:
  format: json
portal:
  brand: "UNW TOEFL Test Center"
  user:
    id: "NIM.654321"
    display_name: "John Roe"
    email: "johnroe@example.com"
  navigation:
    - title: "Dashboard"
      target: "/dashboard"
      icon: layout-dashboard
    - title: "Riwayat"
      icon: history
"#,
    );

    // Tell AppConfig to use this file via Env Var
    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.log_format(), LogFormat::Json);
    assert_eq!(config.portal.brand, "UNW TOEFL Test Center");
    assert_eq!(config.portal.user.display_name, "John Roe");
    let titles: Vec<&str> = config.portal.navigation.titles().collect();
    assert_eq!(titles, ["Dashboard", "Riwayat"]);
    let targets: Vec<&str> = config
        .portal
        .navigation
        .items()
        .iter()
        .map(|item| item.target.as_str())
        .collect();
    assert_eq!(targets, ["/dashboard", "#"]);

    clear_env_vars();
}

#[test]
#[serial]
fn test_duplicate_navigation_rejected() {
    clear_env_vars();

    let file = yaml_file(
        r#"
portal:
  navigation:
    - title: "Dashboard"
      icon: layout-dashboard
    - title: "Dashboard"
      icon: pencil
"#,
    );
    let path = file.path().to_string_lossy().into_owned();

    let err = AppConfig::load_from_args([BIN, "--config", path.as_str()])
        .expect_err("Duplicate titles must fail");
    assert!(err.to_string().contains("duplicate navigation title"));
}

#[test]
#[serial]
fn test_missing_explicit_file_fails() {
    clear_env_vars();

    let result = AppConfig::load_from_args([BIN, "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).expect("Failed to remove ./config.yaml");

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
