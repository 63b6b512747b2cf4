//! Adapter Configuration

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Enter
pub const KEY_ENTER: u32 = 13;
/// Space
pub const KEY_SPACE: u32 = 32;

/// Element adapter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key codes that activate button roles
    pub activation_keys: Vec<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            activation_keys: vec![KEY_ENTER, KEY_SPACE],
        }
    }
}

impl Config {
    /// Check the configuration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.activation_keys.is_empty() {
            return Err(ConfigError::EmptyActivationKeys);
        }
        for (i, key) in self.activation_keys.iter().enumerate() {
            if self.activation_keys[..i].contains(key) {
                return Err(ConfigError::DuplicateActivationKey(*key));
            }
        }
        Ok(())
    }

    pub fn is_activation_key(&self, which: u32) -> bool {
        self.activation_keys.contains(&which)
    }
}
