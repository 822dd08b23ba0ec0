//! Application configuration

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::errors::BoatConsoleError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub bus: BusConfig,
    pub schema: SchemaConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusConfig {
    /// Ring size of the broadcast channel behind the message bus.
    pub capacity: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchemaConfig {
    /// Object API name used for the one-shot column-metadata lookup.
    pub boat_object: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("bus.capacity", 16)?
            .set_default("schema.boat_object", "Boat__c")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(
                Environment::with_prefix("BOATCONSOLE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), BoatConsoleError> {
        if self.bus.capacity == 0 {
            return Err(BoatConsoleError::Configuration {
                message: "Bus capacity must be greater than zero".to_string(),
            });
        }
        if self.schema.boat_object.is_empty() {
            return Err(BoatConsoleError::Configuration {
                message: "Boat object name cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_config() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.bus.capacity, 16);
        assert_eq!(config.schema.boat_object, "Boat__c");

        env::set_var("BOATCONSOLE__BUS__CAPACITY", "64");
        env::set_var("BOATCONSOLE__SCHEMA__BOAT_OBJECT", "Vessel__c");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.bus.capacity, 64);
        assert_eq!(config.schema.boat_object, "Vessel__c");

        env::remove_var("BOATCONSOLE__BUS__CAPACITY");
        env::remove_var("BOATCONSOLE__SCHEMA__BOAT_OBJECT");
    }

    #[test]
    fn test_validate_zero_capacity() {
        let config = AppConfig {
            bus: BusConfig { capacity: 0 },
            schema: SchemaConfig {
                boat_object: "Boat__c".to_string(),
            },
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_object_name() {
        let config = AppConfig {
            bus: BusConfig { capacity: 16 },
            schema: SchemaConfig {
                boat_object: String::new(),
            },
        };

        assert!(config.validate().is_err());
    }
}
