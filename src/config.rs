use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use sundial_season::Hemisphere;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "sundial.toml";

/// Top-level Sundial configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SundialConfig {
    /// Dataset locations.
    #[serde(default)]
    pub data: DataConfig,

    /// Observer location.
    #[serde(default)]
    pub location: LocationToml,

    /// House calendar settings.
    #[serde(default)]
    pub houses: HousesToml,

    /// Grid rendering settings.
    #[serde(default)]
    pub grid: GridToml,
}

/// Dataset paths; the bundled datasets are used for any left unset.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    pub seasons: Option<PathBuf>,
    pub houses: Option<PathBuf>,
}

/// Either a latitude or an explicit hemisphere; the hemisphere wins.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    pub latitude: Option<f64>,
    pub hemisphere: Option<Hemisphere>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HousesToml {
    /// Overrides the dataset's leap-absorbing house.
    pub leap_absorbing_house: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    #[serde(default = "default_true")]
    pub season_badges: bool,
    #[serde(default = "default_true")]
    pub season_labels: bool,
}

impl Default for GridToml {
    fn default() -> Self {
        Self {
            season_badges: true,
            season_labels: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `sundial.toml` in the working
/// directory is used if present, otherwise every setting takes its default.
pub fn load(path: Option<&Path>) -> Result<SundialConfig> {
    let path = match path {
        Some(p) => p,
        None if Path::new(DEFAULT_CONFIG).is_file() => Path::new(DEFAULT_CONFIG),
        None => {
            debug!("no config file, using defaults");
            return Ok(SundialConfig::default());
        }
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: SundialConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = write_config("");
        let config = load(Some(file.path())).unwrap();
        assert!(config.data.seasons.is_none());
        assert!(config.location.hemisphere.is_none());
        assert!(config.grid.season_badges);
        assert!(config.grid.season_labels);
    }

    #[test]
    fn full_file() {
        let file = write_config(
            r#"
            [data]
            seasons = "custom/seasons.json"

            [location]
            latitude = -41.3
            hemisphere = "southern"

            [houses]
            leap_absorbing_house = 6

            [grid]
            season_badges = false
            "#,
        );
        let config = load(Some(file.path())).unwrap();
        assert_eq!(
            config.data.seasons.as_deref(),
            Some(Path::new("custom/seasons.json"))
        );
        assert!(config.data.houses.is_none());
        assert_eq!(config.location.latitude, Some(-41.3));
        assert_eq!(config.location.hemisphere, Some(Hemisphere::Southern));
        assert_eq!(config.houses.leap_absorbing_house, Some(6));
        assert!(!config.grid.season_badges);
        assert!(config.grid.season_labels);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let file = write_config("[location]\nlongitude = 12.0\n");
        let err = load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse TOML config"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
