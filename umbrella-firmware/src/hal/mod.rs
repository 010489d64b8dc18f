// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits aus umbrella-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod led_writer;

pub use led_writer::RmtLedWriter;
pub use umbrella_core::{LedError, LedStripWriter};
