//! Konfigurations-Schlüssel
//!
//! Jede Option der Umbrella-Konfiguration hat genau einen Schlüssel.
//! Die Namen entsprechen den Variablen in der `.env`-Datei.

/// Präfix der Header-Schreibweise (`CONFIG_PIN_SERVO`)
const HEADER_PREFIX: &str = "CONFIG_";

/// Alle bekannten Konfigurations-Optionen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigKey {
    PinServo,
    PinLed,
    ServoDown,
    ServoUp,
    ServoDetachTime,
    ColorOrder,
    LedType,
    NumLeds,
    FadeSpeed,
    LedOffset,
    WifiSsid,
    WifiPass,
    MqttHost,
    MqttPort,
    MqttUser,
    MqttPass,
    MqttClientId,
    MqttTopic,
    Debug,
}

impl ConfigKey {
    /// Anzahl der Schlüssel
    pub const COUNT: usize = 19;

    /// Alle Schlüssel in Datei-Reihenfolge
    pub const ALL: [ConfigKey; Self::COUNT] = [
        ConfigKey::PinServo,
        ConfigKey::PinLed,
        ConfigKey::ServoDown,
        ConfigKey::ServoUp,
        ConfigKey::ServoDetachTime,
        ConfigKey::ColorOrder,
        ConfigKey::LedType,
        ConfigKey::NumLeds,
        ConfigKey::FadeSpeed,
        ConfigKey::LedOffset,
        ConfigKey::WifiSsid,
        ConfigKey::WifiPass,
        ConfigKey::MqttHost,
        ConfigKey::MqttPort,
        ConfigKey::MqttUser,
        ConfigKey::MqttPass,
        ConfigKey::MqttClientId,
        ConfigKey::MqttTopic,
        ConfigKey::Debug,
    ];

    /// Kanonischer Name (so wie in `.env` geschrieben)
    pub const fn name(self) -> &'static str {
        match self {
            ConfigKey::PinServo => "PIN_SERVO",
            ConfigKey::PinLed => "PIN_LED",
            ConfigKey::ServoDown => "SERVO_DOWN",
            ConfigKey::ServoUp => "SERVO_UP",
            ConfigKey::ServoDetachTime => "SERVO_DETACH_TIME",
            ConfigKey::ColorOrder => "COLOR_ORDER",
            ConfigKey::LedType => "LED_TYPE",
            ConfigKey::NumLeds => "NUM_LEDS",
            ConfigKey::FadeSpeed => "FADE_SPEED",
            ConfigKey::LedOffset => "LED_OFFSET",
            ConfigKey::WifiSsid => "WIFI_SSID",
            ConfigKey::WifiPass => "WIFI_PASS",
            ConfigKey::MqttHost => "MQTT_HOST",
            ConfigKey::MqttPort => "MQTT_PORT",
            ConfigKey::MqttUser => "MQTT_USER",
            ConfigKey::MqttPass => "MQTT_PASS",
            ConfigKey::MqttClientId => "MQTT_CLIENT_ID",
            ConfigKey::MqttTopic => "MQTT_TOPIC",
            ConfigKey::Debug => "DEBUG",
        }
    }

    /// Sucht den Schlüssel zu einem Namen
    ///
    /// Akzeptiert den kanonischen Namen und die Header-Schreibweise
    /// mit `CONFIG_`-Präfix.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix(HEADER_PREFIX).unwrap_or(name);
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Position im Werte-Array des Builders
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Muss der Schlüssel in jeder Konfiguration stehen?
    pub const fn is_required(self) -> bool {
        !matches!(
            self,
            ConfigKey::ServoDetachTime
                | ConfigKey::LedOffset
                | ConfigKey::MqttPort
                | ConfigKey::MqttUser
                | ConfigKey::MqttPass
                | ConfigKey::Debug
        )
    }

    /// Passwörter werden in Reports maskiert
    pub const fn is_secret(self) -> bool {
        matches!(self, ConfigKey::WifiPass | ConfigKey::MqttPass)
    }

    /// Darf der Wert leer sein?
    pub(crate) const fn allows_empty(self) -> bool {
        matches!(
            self,
            ConfigKey::WifiPass | ConfigKey::MqttUser | ConfigKey::MqttPass
        )
    }
}

impl core::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
