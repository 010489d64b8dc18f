// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod report;
pub mod tasks;

// Re-exports von umbrella-core
pub use umbrella_core::{
    ColorOrder, ConfigWarning, DetachTime, LedError, LedStripWriter, LedType, UmbrellaConfig,
};
pub use report::report_config;
