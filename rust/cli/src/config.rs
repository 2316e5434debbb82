use holdem_engine::engine::{MAX_PLAYERS, MIN_PLAYERS};
use holdem_engine::player::STARTING_STACK;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_stack: u32,
    pub players: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub starting_stack: ValueSource,
    pub players: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_stack: ValueSource::Default,
            players: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_stack: STARTING_STACK,
            players: MIN_PLAYERS,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration: defaults, then the TOML file named by
/// `HOLDEM_CONFIG`, then `HOLDEM_*` environment overrides.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_stack {
            cfg.starting_stack = v;
            sources.starting_stack = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HOLDEM_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(stack) = std::env::var("HOLDEM_STARTING_STACK")
        && !stack.is_empty()
    {
        cfg.starting_stack = stack
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting_stack".into()))?;
        sources.starting_stack = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("HOLDEM_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    starting_stack: Option<u32>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.starting_stack == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_stack must be >0".into(),
        ));
    }
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    struct EnvGuard {
        restores: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn apply(pairs: &[(&str, &str)]) -> Self {
            let mut restores = Vec::new();
            for (key, value) in pairs {
                restores.push((key.to_string(), std::env::var(key).ok()));
                // SAFETY: tests touching the environment are #[serial]
                unsafe { std::env::set_var(key, value) };
            }
            EnvGuard { restores }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, previous) in self.restores.iter().rev() {
                // SAFETY: see EnvGuard::apply
                unsafe {
                    match previous {
                        Some(val) => std::env::set_var(key, val),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    #[serial]
    fn defaults_when_nothing_is_set() {
        let _g = EnvGuard::apply(&[
            ("HOLDEM_CONFIG", ""),
            ("HOLDEM_SEED", ""),
            ("HOLDEM_STARTING_STACK", ""),
            ("HOLDEM_PLAYERS", ""),
        ]);
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.sources.seed, ValueSource::Default);
    }

    #[test]
    #[serial]
    fn env_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "starting_stack = 500\nplayers = 4\nseed = 7").unwrap();
        let path = file.path().to_string_lossy().to_string();
        let _g = EnvGuard::apply(&[
            ("HOLDEM_CONFIG", path.as_str()),
            ("HOLDEM_SEED", "99"),
            ("HOLDEM_STARTING_STACK", ""),
            ("HOLDEM_PLAYERS", ""),
        ]);
        let resolved = load_with_sources().unwrap();
        assert_eq!(resolved.config.starting_stack, 500);
        assert_eq!(resolved.config.players, 4);
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.sources.starting_stack, ValueSource::File);
        assert_eq!(resolved.sources.seed, ValueSource::Env);
    }

    #[test]
    #[serial]
    fn rejects_out_of_range_players() {
        let _g = EnvGuard::apply(&[
            ("HOLDEM_CONFIG", ""),
            ("HOLDEM_SEED", ""),
            ("HOLDEM_STARTING_STACK", ""),
            ("HOLDEM_PLAYERS", "1"),
        ]);
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
        let _g2 = EnvGuard::apply(&[("HOLDEM_PLAYERS", "23")]);
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn rejects_garbage_seed() {
        let _g = EnvGuard::apply(&[
            ("HOLDEM_CONFIG", ""),
            ("HOLDEM_SEED", "abc"),
            ("HOLDEM_PLAYERS", ""),
        ]);
        assert!(matches!(load(), Err(ConfigError::Invalid(_))));
    }
}
