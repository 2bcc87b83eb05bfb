//! `capreg config`: inspect the effective configuration.

use serde_json::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.result(&get_config_value(&config, &key)?)?;
        }

        ConfigCommands::List => {
            let rendered = config
                .to_toml()
                .with_cli_context(|| "Failed to render configuration")?;
            output.result(rendered.trim_end())?;
        }

        ConfigCommands::Path => {
            let path = AppConfig::active_path(global.config.as_ref());
            output.result(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `registry.mode` or `wiring.area`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let root = serde_json::to_value(config).with_cli_context(|| "Failed to inspect configuration")?;

    let value = key
        .split('.')
        .try_fold(&root, |node, part| node.get(part))
        .ok_or_else(|| CliError::config(format!("Unknown config key: '{key}'")))?;

    Ok(render(value))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_scalar_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "registry.mode").unwrap(), "strict");
        assert_eq!(get_config_value(&cfg, "defaults.sink").unwrap(), "console");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_list_key_joins_values() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "wiring.scanning").unwrap(),
            "multifunction"
        );
        assert!(get_config_value(&cfg, "wiring.area").unwrap().contains("circle, "));
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
