// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.

pub mod led_strip;

// Re-export Tasks für einfachen Import
pub use led_strip::{led_strip_logic, led_strip_task};
