//! Core Types der Umbrella-Konfiguration
//!
//! Datenstrukturen ohne Hardware-Dependencies. Werte werden einmal pro
//! Build gesetzt und von der Firmware beim Start gelesen.

/// Reihenfolge der Farbkanäle auf der Datenleitung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

/// Farbkanal einer RGB-Farbe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl ColorOrder {
    pub const ALL: [ColorOrder; 6] = [
        ColorOrder::Rgb,
        ColorOrder::Rbg,
        ColorOrder::Grb,
        ColorOrder::Gbr,
        ColorOrder::Brg,
        ColorOrder::Bgr,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ColorOrder::Rgb => "RGB",
            ColorOrder::Rbg => "RBG",
            ColorOrder::Grb => "GRB",
            ColorOrder::Gbr => "GBR",
            ColorOrder::Brg => "BRG",
            ColorOrder::Bgr => "BGR",
        }
    }

    /// Groß-/Kleinschreibung egal (`GRB`, `grb`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Kanäle in der Reihenfolge, in der sie gesendet werden
    pub const fn channels(self) -> [Channel; 3] {
        use Channel::{Blue, Green, Red};
        match self {
            ColorOrder::Rgb => [Red, Green, Blue],
            ColorOrder::Rbg => [Red, Blue, Green],
            ColorOrder::Grb => [Green, Red, Blue],
            ColorOrder::Gbr => [Green, Blue, Red],
            ColorOrder::Brg => [Blue, Red, Green],
            ColorOrder::Bgr => [Blue, Green, Red],
        }
    }
}

/// LED-Chip des Strips (nur Single-Wire/Clockless Chips)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedType {
    Ws2811,
    Ws2812,
    Ws2812b,
    Ws2813,
    Ws2815,
    Sk6812,
    Neopixel,
    Apa106,
    Tm1809,
    Tm1812,
    Tm1829,
    Ucs1903,
    Gw6205,
}

impl LedType {
    pub const ALL: [LedType; 13] = [
        LedType::Ws2811,
        LedType::Ws2812,
        LedType::Ws2812b,
        LedType::Ws2813,
        LedType::Ws2815,
        LedType::Sk6812,
        LedType::Neopixel,
        LedType::Apa106,
        LedType::Tm1809,
        LedType::Tm1812,
        LedType::Tm1829,
        LedType::Ucs1903,
        LedType::Gw6205,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            LedType::Ws2811 => "WS2811",
            LedType::Ws2812 => "WS2812",
            LedType::Ws2812b => "WS2812B",
            LedType::Ws2813 => "WS2813",
            LedType::Ws2815 => "WS2815",
            LedType::Sk6812 => "SK6812",
            LedType::Neopixel => "NEOPIXEL",
            LedType::Apa106 => "APA106",
            LedType::Tm1809 => "TM1809",
            LedType::Tm1812 => "TM1812",
            LedType::Tm1829 => "TM1829",
            LedType::Ucs1903 => "UCS1903",
            LedType::Gw6205 => "GW6205",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|led_type| led_type.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Wann der Servo nach einer Bewegung abgekoppelt wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetachTime {
    /// Servo bleibt immer angekoppelt (`-1` in der Konfiguration)
    Never,
    /// Abkoppeln nach dieser Zeit in Millisekunden
    AfterMillis(u32),
}

impl DetachTime {
    /// Wert aus der Konfiguration: `-1` = nie, sonst Millisekunden
    pub const fn from_millis(value: i32) -> Option<Self> {
        match value {
            -1 => Some(DetachTime::Never),
            ms if ms >= 0 => Some(DetachTime::AfterMillis(ms as u32)),
            _ => None,
        }
    }

    pub const fn as_millis(self) -> Option<u32> {
        match self {
            DetachTime::Never => None,
            DetachTime::AfterMillis(ms) => Some(ms),
        }
    }

    /// Wert in der Schreibweise der Konfigurationsdatei
    pub const fn raw(self) -> i64 {
        match self {
            DetachTime::Never => -1,
            DetachTime::AfterMillis(ms) => ms as i64,
        }
    }
}

/// Endposition des Schirms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoConfig {
    pub pin: u8,
    /// Winkel in Grad (0-180)
    pub down: u8,
    /// Winkel in Grad (0-180), immer != `down`
    pub up: u8,
    pub detach: DetachTime,
}

impl ServoConfig {
    /// Winkel für eine Endposition
    pub const fn angle(&self, position: Position) -> u8 {
        match position {
            Position::Down => self.down,
            Position::Up => self.up,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedConfig {
    pub pin: u8,
    pub color_order: ColorOrder,
    pub led_type: LedType,
    /// Anzahl LEDs, muss zur physischen Länge passen (> 0)
    pub num_leds: u16,
    /// 1 = langsam, 255 = schnell
    pub fade_speed: u8,
    /// Verschiebt die Mitte der Animation, 0 = aus
    pub offset: i16,
}

impl LedConfig {
    /// Offset normalisiert auf `0..num_leds`
    pub const fn effective_offset(&self) -> u16 {
        (self.offset as i32).rem_euclid(self.num_leds as i32) as u16
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WifiConfig<'a> {
    pub ssid: &'a str,
    /// Leer = offenes Netzwerk
    pub password: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MqttConfig<'a> {
    pub host: &'a str,
    pub port: u16,
    pub user: &'a str,
    pub password: &'a str,
    /// Muss auf dem Broker eindeutig sein
    pub client_id: &'a str,
    pub topic: &'a str,
}

impl MqttConfig<'_> {
    /// Standard-Port für unverschlüsseltes MQTT
    pub const DEFAULT_PORT: u16 = 1883;

    /// Verbindung ohne Benutzername
    pub fn is_anonymous(&self) -> bool {
        self.user.is_empty()
    }
}

/// Komplette, validierte Konfiguration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UmbrellaConfig<'a> {
    pub servo: ServoConfig,
    pub led: LedConfig,
    pub wifi: WifiConfig<'a>,
    pub mqtt: MqttConfig<'a>,
    /// Serielle Debug-Ausgaben an/aus
    pub debug: bool,
}
