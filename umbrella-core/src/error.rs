//! Fehler und Warnungen der Konfigurations-Validierung

use core::fmt;

use crate::builder::LED_BUFFER_BUDGET;
use crate::key::ConfigKey;

/// Fehler beim Aufbau der Konfiguration
///
/// Jeder Fehler bricht den Build ab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pflicht-Option fehlt
    MissingKey(ConfigKey),
    /// Option mehr als einmal gesetzt
    DuplicateKey(ConfigKey),
    EmptyValue(ConfigKey),
    /// Platzhalter wie `{WIFI-SSID}` nicht ersetzt
    Placeholder(ConfigKey),
    InvalidNumber(ConfigKey),
    InvalidBool(ConfigKey),
    InvalidPin(ConfigKey),
    /// Pin existiert, ist auf dem Board aber nicht nutzbar
    UnusablePin(ConfigKey, u8),
    /// Servo und LED auf demselben Pin
    PinConflict(u8),
    AngleOutOfRange(ConfigKey, i32),
    ServoAnglesEqual(u8),
    InvalidDetachTime(i32),
    UnknownColorOrder,
    UnknownLedType,
    ZeroLedCount,
    FadeSpeedOutOfRange(i32),
    InvalidPort,
    InvalidTopic,
}

impl ConfigError {
    /// Betroffene Option, falls eindeutig
    pub fn key(&self) -> Option<ConfigKey> {
        match *self {
            ConfigError::MissingKey(key)
            | ConfigError::DuplicateKey(key)
            | ConfigError::EmptyValue(key)
            | ConfigError::Placeholder(key)
            | ConfigError::InvalidNumber(key)
            | ConfigError::InvalidBool(key)
            | ConfigError::InvalidPin(key)
            | ConfigError::UnusablePin(key, _)
            | ConfigError::AngleOutOfRange(key, _) => Some(key),
            ConfigError::PinConflict(_) => None,
            ConfigError::ServoAnglesEqual(_) => Some(ConfigKey::ServoUp),
            ConfigError::InvalidDetachTime(_) => Some(ConfigKey::ServoDetachTime),
            ConfigError::UnknownColorOrder => Some(ConfigKey::ColorOrder),
            ConfigError::UnknownLedType => Some(ConfigKey::LedType),
            ConfigError::ZeroLedCount => Some(ConfigKey::NumLeds),
            ConfigError::FadeSpeedOutOfRange(_) => Some(ConfigKey::FadeSpeed),
            ConfigError::InvalidPort => Some(ConfigKey::MqttPort),
            ConfigError::InvalidTopic => Some(ConfigKey::MqttTopic),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingKey(key) => write!(f, "{key} is not set"),
            ConfigError::DuplicateKey(key) => write!(f, "{key} is defined more than once"),
            ConfigError::EmptyValue(key) => write!(f, "{key} must not be empty"),
            ConfigError::Placeholder(key) => {
                write!(f, "{key} still contains a placeholder, replace it before deploying")
            }
            ConfigError::InvalidNumber(key) => write!(f, "{key} is not a valid number"),
            ConfigError::InvalidBool(key) => write!(f, "{key} must be true or false"),
            ConfigError::InvalidPin(key) => write!(f, "{key} is not a valid pin name"),
            ConfigError::UnusablePin(key, gpio) => {
                write!(f, "{key}: GPIO{gpio} cannot be used on this board")
            }
            ConfigError::PinConflict(gpio) => {
                write!(f, "PIN_SERVO and PIN_LED both use GPIO{gpio}")
            }
            ConfigError::AngleOutOfRange(key, angle) => {
                write!(f, "{key} = {angle} is outside the servo range 0-180")
            }
            ConfigError::ServoAnglesEqual(angle) => {
                write!(f, "SERVO_DOWN and SERVO_UP are both {angle}")
            }
            ConfigError::InvalidDetachTime(ms) => {
                write!(f, "SERVO_DETACH_TIME = {ms}, expected milliseconds or -1")
            }
            ConfigError::UnknownColorOrder => {
                f.write_str("COLOR_ORDER must be one of RGB, RBG, GRB, GBR, BRG, BGR")
            }
            ConfigError::UnknownLedType => f.write_str("LED_TYPE is not a supported LED chip"),
            ConfigError::ZeroLedCount => f.write_str("NUM_LEDS must be greater than 0"),
            ConfigError::FadeSpeedOutOfRange(speed) => {
                write!(f, "FADE_SPEED = {speed} is outside 1-255")
            }
            ConfigError::InvalidPort => f.write_str("MQTT_PORT must be a port number 1-65535"),
            ConfigError::InvalidTopic => {
                f.write_str("MQTT_TOPIC must be a non-empty topic without wildcards")
            }
        }
    }
}

/// Hinweise, die den Build nicht abbrechen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigWarning {
    /// Platzhalter erlaubt (Entwicklungs-Build), aber nicht ersetzt
    PlaceholderValue(ConfigKey),
    /// Länger als die 23 Bytes, die MQTT 3.1.1 garantiert
    ClientIdTooLong(usize),
    /// Client-ID aus dem Beispiel übernommen
    DefaultClientId,
    /// |LED_OFFSET| >= NUM_LEDS
    OffsetWraps,
    AnonymousMqtt,
    OpenWifi,
    /// RMT-Puffer für NUM_LEDS größer als das Budget (Bytes)
    LedBufferTooLarge(usize),
    /// `$` ohne einfache Anführungszeichen, dotenvy hat `$NAME` ersetzt
    VariableSubstitution(ConfigKey),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::PlaceholderValue(key) => {
                write!(f, "{key} still contains a placeholder")
            }
            ConfigWarning::ClientIdTooLong(len) => write!(
                f,
                "MQTT_CLIENT_ID is {len} bytes, some brokers only accept 23"
            ),
            ConfigWarning::DefaultClientId => f.write_str(
                "MQTT_CLIENT_ID is the sample value, it must be unique on the broker",
            ),
            ConfigWarning::OffsetWraps => {
                f.write_str("LED_OFFSET is larger than the strip and wraps around")
            }
            ConfigWarning::AnonymousMqtt => {
                f.write_str("MQTT_USER is empty, connecting anonymously")
            }
            ConfigWarning::OpenWifi => f.write_str("WIFI_PASS is empty, expecting an open network"),
            ConfigWarning::LedBufferTooLarge(bytes) => write!(
                f,
                "NUM_LEDS needs {bytes} bytes of RMT buffer, more than the {LED_BUFFER_BUDGET} bytes planned for the LED task"
            ),
            ConfigWarning::VariableSubstitution(key) => write!(
                f,
                "{key} contains `$` outside single quotes and was expanded, write '...' for a literal value"
            ),
        }
    }
}
