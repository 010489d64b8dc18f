//! Ziel-Boards und Pin-Auflösung

/// Board, für das die Konfiguration gebaut wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Board {
    /// ESP8266 auf NodeMCU/Wemos-Boards (Pins auch als D0..D8)
    NodeMcu,
    /// ESP32-C6 DevKit
    Esp32C6,
}

/// NodeMCU Silk-Screen Namen → GPIO
const NODEMCU_ALIASES: [(&str, u8); 9] = [
    ("D0", 16),
    ("D1", 5),
    ("D2", 4),
    ("D3", 0),
    ("D4", 2),
    ("D5", 14),
    ("D6", 12),
    ("D7", 13),
    ("D8", 15),
];

impl Board {
    pub const fn name(self) -> &'static str {
        match self {
            Board::NodeMcu => "NodeMCU (ESP8266)",
            Board::Esp32C6 => "ESP32-C6",
        }
    }

    /// Löst einen Pin-Namen zu einer GPIO-Nummer auf
    ///
    /// Erlaubt sind `4`, `GPIO4` und auf NodeMCU zusätzlich `D2`.
    /// Ob der Pin benutzbar ist, prüft [`Board::is_usable_gpio`].
    pub fn resolve_pin(self, value: &str) -> Option<u8> {
        let value = value.trim();

        if self == Board::NodeMcu {
            if let Some((_, gpio)) = NODEMCU_ALIASES
                .iter()
                .find(|(alias, _)| alias.eq_ignore_ascii_case(value))
            {
                return Some(*gpio);
            }
        }

        let digits = match value.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("GPIO") => &value[4..],
            _ => value,
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    /// Kann der GPIO als Signal-Pin genutzt werden?
    pub const fn is_usable_gpio(self, gpio: u8) -> bool {
        match self {
            // GPIO6-11 hängen am SPI-Flash
            Board::NodeMcu => gpio <= 16 && !(gpio >= 6 && gpio <= 11),
            // GPIO24-30 hängen am SPI-Flash
            Board::Esp32C6 => gpio <= 23,
        }
    }
}
