use std::fs;
use std::path::Path;

use anyhow::Context;
use startup_core::GameConfig;

/// Read a `GameConfig` from a JSON file. Missing fields fall back to the
/// defaults, so `{"width": 10}` is a complete config.
pub fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn parse_config(text: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = serde_json::from_str(text).context("failed to parse config JSON")?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_config(r#"{"width": 10, "par_guesses": 25}"#).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.par_guesses, 25);
        assert_eq!(config.targets, GameConfig::default().targets);
        assert_eq!(config.max_attempts, 200);
    }

    #[test]
    fn custom_targets_are_read() {
        let config = parse_config(
            r#"{"targets": [{"name": "Pets.com", "size": 2}, {"name": "Webvan", "size": 4}]}"#,
        )
        .unwrap();
        assert_eq!(config.target_names(), vec!["Pets.com", "Webvan"]);
        assert_eq!(config.targets[1].size, 4);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        assert!(parse_config("not json").is_err());
        assert!(parse_config(r#"{"width": 2}"#).is_err());
        assert!(parse_config(r#"{"targets": []}"#).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
