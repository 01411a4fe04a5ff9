#[cfg(test)]
mod tests {
    use sharelist::libs::config::{Config, DatabaseConfig, ServerConfig, SessionConfig, ENV_DB, ENV_HOST, ENV_PORT};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Tests here point HOME at their own directory, so they must not overlap.
    static HOME_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.server_settings(), ServerConfig::default());
        assert_eq!(config.server_settings().port, 5000);
        assert_eq!(config.session_settings().cookie_name, "sharelist_session");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_delete(_ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            }),
            database: None,
            session: Some(SessionConfig {
                cookie_name: "sid".to_string(),
                max_age: 60,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);

        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides(_ctx: &mut ConfigTestContext) {
        let config = Config::default().apply_env(env_of(&[(ENV_HOST, "0.0.0.0"), (ENV_PORT, "9000"), (ENV_DB, "/tmp/list.db")]));

        assert_eq!(config.server_settings().host, "0.0.0.0");
        assert_eq!(config.server_settings().port, 9000);
        assert_eq!(config.database_path(false).unwrap(), PathBuf::from("/tmp/list.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_port_is_ignored(_ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 7000,
            }),
            ..Config::default()
        }
        .apply_env(env_of(&[(ENV_PORT, "not-a-port")]));

        assert_eq!(config.server_settings().port, 7000);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_database_paths(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.database_path(false).unwrap().ends_with("sharelist.db"));
        assert!(config.database_path(true).unwrap().ends_with("dashboard.db"));

        let config = Config {
            database: Some(DatabaseConfig {
                path: None,
                solo_path: Some(PathBuf::from("/srv/solo.db")),
            }),
            ..Config::default()
        };
        assert!(config.database_path(false).unwrap().ends_with("sharelist.db"));
        assert_eq!(config.database_path(true).unwrap(), PathBuf::from("/srv/solo.db"));
    }
}
