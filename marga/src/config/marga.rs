//! Main MargaConfig and loading methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::motion::MovementProperties;
use super::planner::PlannerSettings;

/// Full marga configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Agent motion envelope
    #[serde(default)]
    pub motion: MovementProperties,

    /// Search and routing settings
    #[serde(default)]
    pub planner: PlannerSettings,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate both sections
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.motion.validate().map_err(ConfigLoadError::Invalid)?;
        self.planner.validate().map_err(ConfigLoadError::Invalid)
    }
}
