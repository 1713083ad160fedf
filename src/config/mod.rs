use serde::Deserialize;
use std::path::PathBuf;

fn default_rotation() -> f64 {
    0.0
}
fn default_max_radius() -> f64 {
    1000.0
}
fn default_verbose() -> bool {
    false
}

/// Optional file configuration, merged under CLI flags.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Default plot center latitude in degrees.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Default plot center longitude in degrees.
    #[serde(default)]
    pub lon: Option<f64>,
    /// Default plot rotation in degrees clockwise.
    #[serde(default = "default_rotation")]
    pub rotation: f64,
    /// Maximum distance of a derived center from its reference point,
    /// in meters.
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("plotgeo.toml"));
    paths.push(PathBuf::from(".plotgeo.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("plotgeo").join("config.toml"));
        paths.push(config_dir.join("plotgeo.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".plotgeo.toml"));
        paths.push(home.join(".config").join("plotgeo").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: FileConfig = toml::from_str("rotation = 15.0").unwrap();
        assert_eq!(config.rotation, 15.0);
        assert_eq!(config.max_radius, 1000.0);
        assert!(config.lat.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_full_config_parses() {
        let config: FileConfig = toml::from_str(
            r#"
lat = -4.2156
lon = -69.9406
rotation = 30.0
max_radius = 250.0
output = "plots.json"
verbose = true
"#,
        )
        .unwrap();
        assert_eq!(config.lat, Some(-4.2156));
        assert_eq!(config.max_radius, 250.0);
        assert!(config.verbose);
    }
}
