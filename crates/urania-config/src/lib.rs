use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use urania::aspects::AspectKind;
use urania::{CityCatalog, EngineSettings};

/// Default locations tried for `configs/urania.toml`, relative to the working directory
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone)]
pub struct UraniaConfig {
    pub engine: EngineSettings,
    /// City catalog JSON, resolved against the config file's directory
    pub cities_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct LocationsToml {
    #[serde(default)]
    cities_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: Option<EngineSettings>,
    #[serde(default)]
    locations: Option<LocationsToml>,
}

/// Try the common relative paths for `configs/urania.toml`.
pub fn read_config_toml_text() -> anyhow::Result<(PathBuf, String)> {
    for p in &CONFIG_SEARCH_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok((PathBuf::from(p), c));
        }
    }
    anyhow::bail!("Could not load urania.toml from {:?}", CONFIG_SEARCH_PATHS);
}

pub fn validate_engine_settings(settings: &EngineSettings) -> anyhow::Result<()> {
    for kind in AspectKind::ALL {
        let orb = settings.orbs.orb_for(kind);
        if !orb.is_finite() || orb < 0.0 {
            anyhow::bail!("engine.orbs.{} must be a non-negative number, got {}", kind.name().to_lowercase(), orb);
        }
    }
    if !settings.exact_orb.is_finite() || settings.exact_orb <= 0.0 {
        anyhow::bail!("engine.exact_orb must be positive, got {}", settings.exact_orb);
    }
    if settings.min_year > settings.max_year {
        anyhow::bail!(
            "engine.min_year ({}) is after engine.max_year ({})",
            settings.min_year,
            settings.max_year
        );
    }
    Ok(())
}

/// Parse config text. Relative `cities_path` values are joined onto `base_dir`.
pub fn parse_config(text: &str, base_dir: Option<&Path>) -> anyhow::Result<UraniaConfig> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;

    let engine = match root.engine {
        Some(engine) => engine,
        None => {
            log::warn!("Config: no [engine] table, using default engine settings");
            EngineSettings::default()
        }
    };
    validate_engine_settings(&engine)?;

    let cities_path = root
        .locations
        .and_then(|l| l.cities_path)
        .map(|p| match base_dir {
            Some(dir) if p.is_relative() => dir.join(p),
            _ => p,
        });

    Ok(UraniaConfig {
        engine,
        cities_path,
    })
}

pub fn load_config_from(path: &Path) -> anyhow::Result<UraniaConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    let config = parse_config(&text, path.parent())?;
    log::info!("Config: loaded {}", path.display());
    Ok(config)
}

pub fn load_config() -> anyhow::Result<UraniaConfig> {
    let (path, text) = read_config_toml_text()?;
    let config = parse_config(&text, path.parent())?;
    log::info!("Config: loaded {}", path.display());
    Ok(config)
}

pub fn load_city_catalog(path: &Path) -> anyhow::Result<CityCatalog> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read city catalog {}: {e}", path.display()))?;
    CityCatalog::from_json_str(&text)
        .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
}
