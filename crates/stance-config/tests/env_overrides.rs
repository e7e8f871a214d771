use figment::Jail;
use pretty_assertions::assert_eq;
use stance_config::{ConfigError, StanceConfig};
use std::path::Path;

#[test]
fn env_sets_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("STANCE_ANALYSIS__STRICT", "true");
        jail.set_env("STANCE_OUTPUT__FORMAT", "table");

        let config = StanceConfig::load().expect("config loads");
        assert!(config.analysis.strict);
        assert_eq!(config.output.format, "table");
        Ok(())
    });
}

#[test]
fn env_beats_explicit_file() {
    Jail::expect_with(|jail| {
        jail.create_file("stance.toml", "[rules]\npath = \"from-file.toml\"\n")?;
        jail.set_env("STANCE_RULES__PATH", "from-env.toml");

        let config = StanceConfig::load_from(Some(Path::new("stance.toml"))).expect("loads");
        assert_eq!(config.rules.path, "from-env.toml");
        Ok(())
    });
}

#[test]
fn invalid_env_format_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("STANCE_OUTPUT__FORMAT", "xml");

        assert!(matches!(
            StanceConfig::load(),
            Err(ConfigError::InvalidValue { .. })
        ));
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "STANCE_RULES__PATH=from-dotenv.toml\n")?;
        jail.create_file("stance.toml", "[output]\nformat = \"raw\"\n")?;

        let config =
            StanceConfig::load_with_dotenv(Some(Path::new("stance.toml"))).expect("loads");
        assert_eq!(config.rules.path, "from-dotenv.toml");
        assert_eq!(config.output.format, "raw");
        Ok(())
    });
}

#[test]
fn dotenv_load_still_checks_explicit_file() {
    Jail::expect_with(|_| {
        assert!(matches!(
            StanceConfig::load_with_dotenv(Some(Path::new("missing.toml"))),
            Err(ConfigError::FileNotFound { .. })
        ));
        Ok(())
    });
}
