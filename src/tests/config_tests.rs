#[cfg(test)]
mod tests {
    use crate::config::Config;
    use std::env;
    use std::sync::Mutex;

    // Config reads process-wide env vars, so these tests run one at a time
    static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

    const CONFIG_VARS: [&str; 3] = ["DATABASE_URL", "DATABASE_MAX_CONNECTIONS", "DATABASE_MIN_CONNECTIONS"];

    fn run_with_env_isolation<F, R>(test_fn: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = CONFIG_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let original_values: Vec<(&str, Option<String>)> =
            CONFIG_VARS.iter().map(|key| (*key, env::var(key).ok())).collect();

        for key in CONFIG_VARS {
            env::remove_var(key);
        }

        let result = test_fn();

        for (key, original_value) in original_values {
            env::remove_var(key);
            if let Some(value) = original_value {
                env::set_var(key, value);
            }
        }

        result
    }

    #[test]
    fn test_config_reads_database_settings() {
        run_with_env_isolation(|| {
            env::set_var("DATABASE_URL", "postgresql://test:test@db:5432/geo_test");
            env::set_var("DATABASE_MAX_CONNECTIONS", "8");
            env::set_var("DATABASE_MIN_CONNECTIONS", "1");

            let config = Config::from_env().unwrap();
            assert_eq!(config.database_url, "postgresql://test:test@db:5432/geo_test");
            assert_eq!(config.max_connections, 8);
            assert_eq!(config.min_connections, 1);
        });
    }

    #[test]
    fn test_config_falls_back_on_unparseable_pool_sizes() {
        run_with_env_isolation(|| {
            env::set_var("DATABASE_URL", "postgresql://test:test@db:5432/geo_test");
            env::set_var("DATABASE_MAX_CONNECTIONS", "many");

            let config = Config::from_env().unwrap();
            assert_eq!(config.max_connections, 20);
            assert_eq!(config.min_connections, 2);
        });
    }
}
