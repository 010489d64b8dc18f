//! Umbrella Core - Platform-agnostic Configuration and Logic
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie beschreibt die Build-Konfiguration des Smart Umbrella
//! (Pins, Servo, LED-Strip, WiFi, MQTT, Debug) und prüft sie.

#![no_std]

#[cfg(any(test, feature = "dotenv"))]
extern crate std;

pub mod board;
pub mod builder;
pub mod codegen;
pub mod error;
pub mod key;
pub mod logic;
pub mod placeholder;
pub mod traits;
pub mod types;

#[cfg(feature = "dotenv")]
pub mod env_file;

// Re-exports für einfachen Zugriff
pub use board::Board;
pub use builder::{ConfigBuilder, PlaceholderPolicy, parse_bool};
pub use error::{ConfigError, ConfigWarning};
pub use key::ConfigKey;
pub use logic::{marker_frame, physical_index, remap_for_driver, wire_bytes};
pub use placeholder::{contains_placeholder, is_placeholder};
pub use traits::{LedError, LedStripWriter};
pub use types::{
    Channel, ColorOrder, DetachTime, LedConfig, LedType, MqttConfig, Position, ServoConfig,
    UmbrellaConfig, WifiConfig,
};

#[cfg(feature = "dotenv")]
pub use env_file::EnvFile;
