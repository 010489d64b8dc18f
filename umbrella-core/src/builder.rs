//! Aufbau und Validierung der Konfiguration
//!
//! Der Builder sammelt rohe `KEY=VALUE` Paare (aus `.env` oder der
//! Umgebung) und macht daraus eine typisierte [`UmbrellaConfig`].

use crate::board::Board;
use crate::error::{ConfigError, ConfigWarning};
use crate::key::ConfigKey;
use crate::placeholder::contains_placeholder;
use crate::types::{
    ColorOrder, DetachTime, LedConfig, LedType, MqttConfig, ServoConfig, UmbrellaConfig,
    WifiConfig,
};

/// Maximaler Servo-Winkel in Grad
pub const SERVO_MAX_ANGLE: i32 = 180;

/// Client-ID Länge, die jeder MQTT 3.1.1 Broker akzeptieren muss
pub const MQTT_CLIENT_ID_MAX_LEN: usize = 23;

/// Client-ID der Beispiel-Konfiguration
pub const SAMPLE_CLIENT_ID: &str = "umbrella";

/// RAM, den der RMT-Puffer der LED-Task höchstens belegen sollte (Bytes)
pub const LED_BUFFER_BUDGET: usize = 32 * 1024;

/// 24 Bit pro LED, je ein 32-Bit Pulse-Code
const RMT_BYTES_PER_LED: usize = 24 * 4;

/// Defaults für optionale Schlüssel
const DEFAULT_DETACH_TIME: DetachTime = DetachTime::AfterMillis(1000);
const DEFAULT_LED_OFFSET: i16 = 0;
const DEFAULT_DEBUG: bool = false;

/// Umgang mit nicht ersetzten Platzhaltern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderPolicy {
    /// Deployment-Build: Platzhalter sind ein Fehler
    Reject,
    /// Entwicklungs-Build: Platzhalter werden nur gemeldet
    Allow,
}

/// Sammelt Konfigurations-Werte
#[derive(Debug, Clone)]
pub struct ConfigBuilder<'a> {
    board: Board,
    values: [Option<&'a str>; ConfigKey::COUNT],
}

impl<'a> ConfigBuilder<'a> {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            values: [None; ConfigKey::COUNT],
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    /// Setzt den Rohwert einer Option
    ///
    /// Jede Option darf genau einmal gesetzt werden.
    pub fn set(&mut self, key: ConfigKey, value: &'a str) -> Result<(), ConfigError> {
        let slot = &mut self.values[key.index()];
        if slot.is_some() {
            return Err(ConfigError::DuplicateKey(key));
        }
        *slot = Some(value.trim());
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> Option<&'a str> {
        self.values[key.index()]
    }

    /// Optionen, deren Wert noch ein Platzhalter ist
    pub fn placeholders(&self) -> impl Iterator<Item = ConfigKey> + '_ {
        ConfigKey::ALL
            .into_iter()
            .filter(move |key| self.get(*key).is_some_and(contains_placeholder))
    }

    /// Validiert alle Werte und baut die Konfiguration
    pub fn build(&self, policy: PlaceholderPolicy) -> Result<UmbrellaConfig<'a>, ConfigError> {
        for key in ConfigKey::ALL {
            match self.get(key) {
                None if key.is_required() => return Err(ConfigError::MissingKey(key)),
                None => {}
                Some("") if !key.allows_empty() => return Err(ConfigError::EmptyValue(key)),
                Some(value)
                    if policy == PlaceholderPolicy::Reject && contains_placeholder(value) =>
                {
                    return Err(ConfigError::Placeholder(key));
                }
                Some(_) => {}
            }
        }

        let servo = self.servo()?;
        let led = self.led()?;

        if servo.pin == led.pin {
            return Err(ConfigError::PinConflict(servo.pin));
        }

        let wifi = WifiConfig {
            ssid: self.text(ConfigKey::WifiSsid),
            password: self.text(ConfigKey::WifiPass),
        };

        let mqtt = self.mqtt()?;

        let debug = match self.get(ConfigKey::Debug) {
            Some(value) => parse_bool(value).ok_or(ConfigError::InvalidBool(ConfigKey::Debug))?,
            None => DEFAULT_DEBUG,
        };

        Ok(UmbrellaConfig {
            servo,
            led,
            wifi,
            mqtt,
            debug,
        })
    }

    fn servo(&self) -> Result<ServoConfig, ConfigError> {
        let pin = self.pin(ConfigKey::PinServo)?;
        let down = self.angle(ConfigKey::ServoDown)?;
        let up = self.angle(ConfigKey::ServoUp)?;
        if down == up {
            return Err(ConfigError::ServoAnglesEqual(up));
        }

        let detach = match self.get(ConfigKey::ServoDetachTime) {
            Some(value) => {
                let ms = self.number::<i32>(ConfigKey::ServoDetachTime, value)?;
                DetachTime::from_millis(ms).ok_or(ConfigError::InvalidDetachTime(ms))?
            }
            None => DEFAULT_DETACH_TIME,
        };

        Ok(ServoConfig {
            pin,
            down,
            up,
            detach,
        })
    }

    fn led(&self) -> Result<LedConfig, ConfigError> {
        let pin = self.pin(ConfigKey::PinLed)?;
        let color_order = ColorOrder::from_name(self.text(ConfigKey::ColorOrder))
            .ok_or(ConfigError::UnknownColorOrder)?;
        let led_type =
            LedType::from_name(self.text(ConfigKey::LedType)).ok_or(ConfigError::UnknownLedType)?;

        let num_leds = self.number::<u16>(ConfigKey::NumLeds, self.text(ConfigKey::NumLeds))?;
        if num_leds == 0 {
            return Err(ConfigError::ZeroLedCount);
        }

        let fade_speed =
            self.number::<i32>(ConfigKey::FadeSpeed, self.text(ConfigKey::FadeSpeed))?;
        let fade_speed = u8::try_from(fade_speed)
            .ok()
            .filter(|speed| *speed >= 1)
            .ok_or(ConfigError::FadeSpeedOutOfRange(fade_speed))?;

        let offset = match self.get(ConfigKey::LedOffset) {
            Some(value) => self.number::<i16>(ConfigKey::LedOffset, value)?,
            None => DEFAULT_LED_OFFSET,
        };

        Ok(LedConfig {
            pin,
            color_order,
            led_type,
            num_leds,
            fade_speed,
            offset,
        })
    }

    fn mqtt(&self) -> Result<MqttConfig<'a>, ConfigError> {
        let port = match self.get(ConfigKey::MqttPort) {
            Some(value) => value
                .parse::<u16>()
                .ok()
                .filter(|port| *port != 0)
                .ok_or(ConfigError::InvalidPort)?,
            None => MqttConfig::DEFAULT_PORT,
        };

        let topic = self.text(ConfigKey::MqttTopic);
        if !is_valid_topic(topic) {
            return Err(ConfigError::InvalidTopic);
        }

        Ok(MqttConfig {
            host: self.text(ConfigKey::MqttHost),
            port,
            user: self.text(ConfigKey::MqttUser),
            password: self.text(ConfigKey::MqttPass),
            client_id: self.text(ConfigKey::MqttClientId),
            topic,
        })
    }

    /// Rohwert oder leerer String (Pflicht-Optionen sind bereits geprüft)
    fn text(&self, key: ConfigKey) -> &'a str {
        self.get(key).unwrap_or("")
    }

    fn number<T: core::str::FromStr>(&self, key: ConfigKey, value: &str) -> Result<T, ConfigError> {
        value.parse().map_err(|_| ConfigError::InvalidNumber(key))
    }

    fn pin(&self, key: ConfigKey) -> Result<u8, ConfigError> {
        let gpio = self
            .board
            .resolve_pin(self.text(key))
            .ok_or(ConfigError::InvalidPin(key))?;
        if !self.board.is_usable_gpio(gpio) {
            return Err(ConfigError::UnusablePin(key, gpio));
        }
        Ok(gpio)
    }

    fn angle(&self, key: ConfigKey) -> Result<u8, ConfigError> {
        let angle = self.number::<i32>(key, self.text(key))?;
        if !(0..=SERVO_MAX_ANGLE).contains(&angle) {
            return Err(ConfigError::AngleOutOfRange(key, angle));
        }
        Ok(angle as u8)
    }
}

/// `true/false`, `1/0`, `yes/no`, `on/off` (Groß-/Kleinschreibung egal)
pub fn parse_bool(value: &str) -> Option<bool> {
    const TRUE: [&str; 4] = ["true", "1", "yes", "on"];
    const FALSE: [&str; 4] = ["false", "0", "no", "off"];

    let value = value.trim();
    if TRUE.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        Some(true)
    } else if FALSE.iter().any(|v| v.eq_ignore_ascii_case(value)) {
        Some(false)
    } else {
        None
    }
}

/// Einzelnes Kommando-Topic: nicht leer, keine Wildcards, kein NUL
fn is_valid_topic(topic: &str) -> bool {
    !topic.is_empty() && !topic.contains(['+', '#', '\0'])
}

impl UmbrellaConfig<'_> {
    /// Hinweise zur Konfiguration, die den Build nicht abbrechen
    pub fn warnings(&self) -> impl Iterator<Item = ConfigWarning> {
        let text_fields = [
            (ConfigKey::WifiSsid, self.wifi.ssid),
            (ConfigKey::WifiPass, self.wifi.password),
            (ConfigKey::MqttHost, self.mqtt.host),
            (ConfigKey::MqttUser, self.mqtt.user),
            (ConfigKey::MqttPass, self.mqtt.password),
            (ConfigKey::MqttClientId, self.mqtt.client_id),
            (ConfigKey::MqttTopic, self.mqtt.topic),
        ];
        let placeholders = text_fields.map(|(key, value)| {
            contains_placeholder(value).then_some(ConfigWarning::PlaceholderValue(key))
        });

        let client_id_len = self.mqtt.client_id.len();
        let led_buffer = usize::from(self.led.num_leds) * RMT_BYTES_PER_LED;
        let others = [
            (client_id_len > MQTT_CLIENT_ID_MAX_LEN)
                .then_some(ConfigWarning::ClientIdTooLong(client_id_len)),
            (self.mqtt.client_id == SAMPLE_CLIENT_ID).then_some(ConfigWarning::DefaultClientId),
            (self.led.offset.unsigned_abs() >= self.led.num_leds)
                .then_some(ConfigWarning::OffsetWraps),
            self.mqtt.is_anonymous().then_some(ConfigWarning::AnonymousMqtt),
            self.wifi.password.is_empty().then_some(ConfigWarning::OpenWifi),
            (led_buffer > LED_BUFFER_BUDGET)
                .then_some(ConfigWarning::LedBufferTooLarge(led_buffer)),
        ];

        placeholders.into_iter().chain(others).flatten()
    }
}
