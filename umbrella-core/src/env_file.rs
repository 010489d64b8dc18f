//! `.env` Dateien lesen (Feature `dotenv`)
//!
//! Wird von build.rs und den Host-Tests genutzt, nie auf dem Target.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::string::String;
use std::vec::Vec;

use crate::board::Board;
use crate::builder::ConfigBuilder;
use crate::error::{ConfigError, ConfigWarning};
use crate::key::ConfigKey;

/// `KEY=VALUE` Paare in Datei-Reihenfolge
///
/// Doppelte Einträge bleiben erhalten, damit der Builder sie melden kann.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
    /// Namen, deren Wert dotenvy per `$NAME` ersetzt hat
    substituted: Vec<String>,
}

impl EnvFile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, dotenvy::Error> {
        let text = fs::read_to_string(path).map_err(dotenvy::Error::Io)?;
        Self::from_text(&text)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, dotenvy::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(dotenvy::Error::Io)?;
        Self::from_text(&text)
    }

    fn from_text(text: &str) -> Result<Self, dotenvy::Error> {
        let entries = dotenvy::from_read_iter(text.as_bytes()).collect::<Result<Vec<_>, _>>()?;
        let substituted = text
            .lines()
            .filter_map(substituted_name)
            .map(String::from)
            .collect();
        Ok(Self {
            entries,
            substituted,
        })
    }

    /// Nur die Umbrella-Optionen aus der Prozess-Umgebung
    pub fn from_process_env() -> Self {
        let mut entries: Vec<_> = std::env::vars()
            .filter(|(key, _)| ConfigKey::from_name(key).is_some())
            .collect();
        entries.sort();
        Self {
            entries,
            substituted: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Füttert alle bekannten Optionen in einen Builder
    ///
    /// Gibt zusätzlich die Namen zurück, die keine Umbrella-Option sind.
    pub fn builder(&self, board: Board) -> Result<(ConfigBuilder<'_>, Vec<&str>), ConfigError> {
        let mut builder = ConfigBuilder::new(board);
        let mut unknown = Vec::new();

        for (name, value) in &self.entries {
            match ConfigKey::from_name(name) {
                Some(key) => builder.set(key, value)?,
                None => unknown.push(name.as_str()),
            }
        }

        Ok((builder, unknown))
    }

    /// Optionen, deren Wert beim Lesen durch `$NAME` Ersetzung verändert wurde
    pub fn warnings(&self) -> impl Iterator<Item = ConfigWarning> + '_ {
        self.substituted
            .iter()
            .filter_map(|name| ConfigKey::from_name(name))
            .map(ConfigWarning::VariableSubstitution)
    }
}

/// Name aus einer `KEY=VALUE` Zeile, wenn der Wert ein unmaskiertes `$`
/// außerhalb einfacher Anführungszeichen enthält
fn substituted_name(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (name, value) = line.split_once('=')?;
    let value = value.trim_start();

    if name.starts_with('#') || value.starts_with('\'') {
        return None;
    }

    value
        .match_indices('$')
        .any(|(at, _)| !value[..at].ends_with('\\'))
        .then_some(name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::PlaceholderPolicy;

    const MINIMAL: &str = "\
# Pins
PIN_SERVO=4
PIN_LED=8
SERVO_DOWN=8
SERVO_UP=73
COLOR_ORDER=GRB
LED_TYPE=WS2812B
NUM_LEDS=16
FADE_SPEED=80
WIFI_SSID=HomeNet
WIFI_PASS=secret
MQTT_HOST=broker.local
MQTT_CLIENT_ID=umbrella-hallway
MQTT_TOPIC=home/umbrella
";

    #[test]
    fn test_reads_entries_in_order() {
        let file = EnvFile::from_reader(MINIMAL.as_bytes()).unwrap();
        assert_eq!(file.entries().len(), 13);
        assert_eq!(file.entries()[0], ("PIN_SERVO".into(), "4".into()));
    }

    #[test]
    fn test_builder_collects_unknown_keys() {
        let text = std::format!("{MINIMAL}RUST_LOG=info\n");
        let file = EnvFile::from_reader(text.as_bytes()).unwrap();
        let (builder, unknown) = file.builder(Board::Esp32C6).unwrap();
        assert_eq!(unknown, ["RUST_LOG"]);

        let config = builder.build(PlaceholderPolicy::Reject).unwrap();
        assert_eq!(config.led.pin, 8);
    }

    #[test]
    fn test_from_path() {
        let path = std::env::temp_dir().join(std::format!(
            "umbrella-core-{}-from-path.env",
            std::process::id()
        ));
        std::fs::write(&path, MINIMAL).unwrap();
        let file = EnvFile::from_path(&path);
        std::fs::remove_file(&path).unwrap();

        let file = file.unwrap();
        assert_eq!(file.entries().len(), 13);
        assert_eq!(
            file.entries()[12],
            ("MQTT_TOPIC".into(), "home/umbrella".into())
        );
    }

    #[test]
    fn test_from_path_missing_file() {
        let path = std::env::temp_dir().join("umbrella-core-does-not-exist.env");
        assert!(matches!(
            EnvFile::from_path(&path),
            Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_from_process_env_keeps_known_keys_sorted() {
        // SAFETY: kein anderer Test liest oder setzt diese Variablen
        unsafe {
            std::env::set_var("CONFIG_MQTT_TOPIC", "home/umbrella");
            std::env::set_var("CONFIG_FADE_SPEED", "80");
            std::env::set_var("UMBRELLA_TEST_UNRELATED", "1");
        }

        let file = EnvFile::from_process_env();
        let names: Vec<&str> = file.entries().iter().map(|(name, _)| name.as_str()).collect();

        assert!(names.contains(&"CONFIG_MQTT_TOPIC"));
        assert!(names.contains(&"CONFIG_FADE_SPEED"));
        assert!(!names.contains(&"UMBRELLA_TEST_UNRELATED"));
        assert!(names.iter().all(|name| ConfigKey::from_name(name).is_some()));
        assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(file.warnings().count(), 0);
    }

    #[test]
    fn test_dollar_in_secret_is_reported() {
        let text = MINIMAL.replace("WIFI_PASS=secret", "WIFI_PASS=pa$word123");
        let file = EnvFile::from_reader(text.as_bytes()).unwrap();
        let warnings: Vec<_> = file.warnings().collect();
        assert_eq!(
            warnings,
            [ConfigWarning::VariableSubstitution(ConfigKey::WifiPass)]
        );

        let text = MINIMAL.replace("WIFI_PASS=secret", "WIFI_PASS=\"pa$word123\"");
        let file = EnvFile::from_reader(text.as_bytes()).unwrap();
        assert_eq!(file.warnings().count(), 1);
    }

    #[test]
    fn test_single_quoted_dollar_is_literal() {
        let text = MINIMAL.replace("WIFI_PASS=secret", "WIFI_PASS='pa$word123'");
        let file = EnvFile::from_reader(text.as_bytes()).unwrap();
        assert_eq!(file.warnings().count(), 0);

        let (builder, _) = file.builder(Board::Esp32C6).unwrap();
        let config = builder.build(PlaceholderPolicy::Reject).unwrap();
        assert_eq!(config.wifi.password, "pa$word123");
    }

    #[test]
    fn test_escaped_dollar_and_comments() {
        let text = std::format!("{MINIMAL}# MQTT_PASS=$OLD\nMQTT_PASS=pa\\$word\n");
        let file = EnvFile::from_reader(text.as_bytes()).unwrap();
        assert_eq!(file.warnings().count(), 0);
    }

    #[test]
    fn test_duplicate_lines_are_rejected() {
        let text = std::format!("{MINIMAL}CONFIG_NUM_LEDS=24\n");
        let file = EnvFile::from_reader(text.as_bytes()).unwrap();
        assert_eq!(
            file.builder(Board::Esp32C6).err(),
            Some(ConfigError::DuplicateKey(ConfigKey::NumLeds))
        );
    }
}
