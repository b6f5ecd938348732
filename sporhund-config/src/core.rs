//! Core substrate configuration parameters.
//!
//! Manages the fundamental properties of the instrumentation substrate:
//! - Arena region sizing
//! - Counter dump destination defaults

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

/// Core substrate configuration parameters.
#[derive(Default, Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CoreConfig {
    /// Memory management settings for the arena allocator.
    #[validate(nested)]
    pub memory: MemoryConfig,
}

/// Arena memory configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct MemoryConfig {
    /// Capacity of each arena region (bytes). Must be a power of two;
    /// the reference deployment used 1 GiB regions, embedded targets
    /// want far less.
    #[serde(default = "default_region_capacity")]
    #[validate(range(min = 4096, max = 1_073_741_824))]
    #[validate(custom(function = validation::validate_power_of_two))]
    pub region_capacity: usize,
}

fn default_region_capacity() -> usize {
    65536
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            region_capacity: default_region_capacity(),
        }
    }
}
