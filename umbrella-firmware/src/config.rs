// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Die Umbrella-Optionen (Pins, Servo, LED-Strip, WiFi, MQTT, DEBUG)
// kommen aus der .env Datei (siehe .env.example). build.rs prüft sie
// und generiert daraus typisierte Konstanten.
#![allow(dead_code)]

include!(concat!(env!("OUT_DIR"), "/umbrella_config.rs"));

// ============================================================================
// Compile-Zeit Prüfungen
// ============================================================================
//
// build.rs validiert bereits. Diese Asserts halten die Invarianten auch
// dann, wenn die generierte Datei von Hand verändert wurde.

const _: () = assert!(SERVO_DOWN != SERVO_UP, "SERVO_DOWN und SERVO_UP müssen sich unterscheiden");
const _: () = assert!(SERVO_DOWN <= 180 && SERVO_UP <= 180, "Servo-Winkel außerhalb 0-180");
const _: () = assert!(NUM_LEDS > 0, "NUM_LEDS muss größer als 0 sein");
const _: () = assert!(FADE_SPEED >= 1, "FADE_SPEED muss zwischen 1 und 255 liegen");
const _: () = assert!(PIN_SERVO != PIN_LED, "Servo und LED brauchen eigene Pins");
const _: () = assert!(MQTT_PORT != 0, "MQTT_PORT darf nicht 0 sein");

// ============================================================================
// LED Hardware Konfiguration
// ============================================================================

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// RMT Pulse-Buffer: 24 Bits pro LED + 1 Reset-Puls
pub const LED_BUFFER_SIZE: usize = NUM_LEDS * 24 + 1;

/// Reihenfolge, in der der WS2812-Adapter die Kanäle sendet
pub const DRIVER_COLOR_ORDER: umbrella_core::ColorOrder = umbrella_core::ColorOrder::Grb;

/// Intervall des Main-Loops in Sekunden
pub const IDLE_INTERVAL_SECS: u64 = 3600;
