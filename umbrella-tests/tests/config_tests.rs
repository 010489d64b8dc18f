//! Integration Tests für die Umbrella-Konfiguration
//!
//! Prüft die mitgelieferte .env.example und die Regeln, die build.rs
//! beim Kompilieren der Firmware anwendet.

use umbrella_core::{
    Board, ConfigError, ConfigKey, ConfigWarning, DetachTime, EnvFile, PlaceholderPolicy,
};

const SAMPLE: &str = include_str!("../../umbrella-firmware/.env.example");

/// Beispiel-Konfiguration mit ersetzten Platzhaltern
fn deployed_sample() -> String {
    SAMPLE
        .replace("{WIFI-SSID}", "HomeNet")
        .replace("{WIFI-PASSWORD}", "correct-horse")
        .replace("{MQTT-SERVER}", "192.168.1.10")
        .replace("{MQTT-USERNAME}", "umbrella")
        .replace("{MQTT-PASSWORD}", "battery-staple")
        .replace("MQTT_CLIENT_ID=umbrella", "MQTT_CLIENT_ID=umbrella-hallway")
}

fn load(text: &str) -> EnvFile {
    EnvFile::from_reader(text.as_bytes()).unwrap()
}

/// Ersetzt die Zeile `KEY=...` durch `KEY=value`
fn with_value(text: &str, key: ConfigKey, value: &str) -> String {
    let prefix = format!("{}=", key.name());
    text.lines()
        .map(|line| {
            if line.starts_with(&prefix) {
                format!("{prefix}{value}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests: .env.example
// ============================================================================

#[test]
fn test_sample_defines_every_key_exactly_once() {
    let file = load(SAMPLE);
    for key in ConfigKey::ALL {
        let count = file
            .entries()
            .iter()
            .filter(|(name, _)| ConfigKey::from_name(name) == Some(key))
            .count();
        assert_eq!(count, 1, "{key}");
    }
    assert_eq!(file.entries().len(), ConfigKey::COUNT);
}

#[test]
fn test_sample_still_contains_placeholders() {
    let file = load(SAMPLE);
    let (builder, unknown) = file.builder(Board::Esp32C6).unwrap();
    assert!(unknown.is_empty());

    let placeholders: Vec<_> = builder.placeholders().collect();
    assert_eq!(
        placeholders,
        [
            ConfigKey::WifiSsid,
            ConfigKey::WifiPass,
            ConfigKey::MqttHost,
            ConfigKey::MqttUser,
            ConfigKey::MqttPass,
        ]
    );
}

#[test]
fn test_sample_is_rejected_for_deployment() {
    let file = load(SAMPLE);
    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    assert_eq!(
        builder.build(PlaceholderPolicy::Reject),
        Err(ConfigError::Placeholder(ConfigKey::WifiSsid))
    );
}

#[test]
fn test_sample_builds_for_development() {
    let file = load(SAMPLE);
    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    let config = builder.build(PlaceholderPolicy::Allow).unwrap();

    assert_eq!(config.servo.pin, 4);
    assert_eq!(config.led.pin, 8);
    assert_eq!(config.servo.detach, DetachTime::AfterMillis(1000));
    assert_eq!(config.mqtt.port, 1883);
    assert!(!config.debug);

    let warnings: Vec<_> = config.warnings().collect();
    assert!(warnings.contains(&ConfigWarning::PlaceholderValue(ConfigKey::MqttHost)));
    assert!(warnings.contains(&ConfigWarning::DefaultClientId));
}

#[test]
fn test_replaced_sample_builds_for_deployment() {
    let file = load(&deployed_sample());
    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    assert_eq!(builder.placeholders().count(), 0);

    let config = builder.build(PlaceholderPolicy::Reject).unwrap();
    assert_eq!(config.wifi.ssid, "HomeNet");
    assert_eq!(config.wifi.password, "correct-horse");
    assert_eq!(config.mqtt.host, "192.168.1.10");
    assert_eq!(config.mqtt.client_id, "umbrella-hallway");
    assert_eq!(config.warnings().count(), 0);
    assert_eq!(file.warnings().count(), 0);
}

#[test]
fn test_half_replaced_placeholder_is_rejected() {
    let text = with_value(&deployed_sample(), ConfigKey::MqttHost, "mqtt://{MQTT-SERVER}");
    let file = load(&text);
    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    assert_eq!(
        builder.build(PlaceholderPolicy::Reject),
        Err(ConfigError::Placeholder(ConfigKey::MqttHost))
    );
}

#[test]
fn test_dollar_in_password() {
    let text = with_value(&deployed_sample(), ConfigKey::WifiPass, "pa$word123");
    let file = load(&text);
    let warnings: Vec<_> = file.warnings().collect();
    assert_eq!(
        warnings,
        [ConfigWarning::VariableSubstitution(ConfigKey::WifiPass)]
    );

    let text = with_value(&deployed_sample(), ConfigKey::WifiPass, "'pa$word123'");
    let file = load(&text);
    assert_eq!(file.warnings().count(), 0);
    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    let config = builder.build(PlaceholderPolicy::Reject).unwrap();
    assert_eq!(config.wifi.password, "pa$word123");
}

// ============================================================================
// Tests: Regeln
// ============================================================================

#[test]
fn test_duplicate_definition_is_rejected() {
    let text = format!("{}\nCONFIG_SERVO_UP=90\n", deployed_sample());
    let file = load(&text);
    assert_eq!(
        file.builder(Board::Esp32C6).err(),
        Some(ConfigError::DuplicateKey(ConfigKey::ServoUp))
    );
}

#[test]
fn test_equal_servo_angles_are_rejected() {
    let text = with_value(&deployed_sample(), ConfigKey::ServoUp, "8");
    let file = load(&text);
    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    assert_eq!(
        builder.build(PlaceholderPolicy::Reject),
        Err(ConfigError::ServoAnglesEqual(8))
    );
}

#[test]
fn test_led_count_must_be_positive() {
    let text = with_value(&deployed_sample(), ConfigKey::NumLeds, "0");
    let file = load(&text);
    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    assert_eq!(
        builder.build(PlaceholderPolicy::Reject),
        Err(ConfigError::ZeroLedCount)
    );
}

#[test]
fn test_fade_speed_bounds() {
    for (value, ok) in [("0", false), ("1", true), ("255", true), ("256", false)] {
        let text = with_value(&deployed_sample(), ConfigKey::FadeSpeed, value);
        let file = load(&text);
        let (builder, _) = file.builder(Board::Esp32C6).unwrap();
        assert_eq!(builder.build(PlaceholderPolicy::Reject).is_ok(), ok, "{value}");
    }
}

#[test]
fn test_never_detach() {
    let text = with_value(&deployed_sample(), ConfigKey::ServoDetachTime, "-1");
    let file = load(&text);
    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    let config = builder.build(PlaceholderPolicy::Reject).unwrap();
    assert_eq!(config.servo.detach, DetachTime::Never);
    assert_eq!(config.servo.detach.as_millis(), None);
}

#[test]
fn test_nodemcu_pin_names() {
    let text = with_value(&deployed_sample(), ConfigKey::PinServo, "D2");
    let text = with_value(&text, ConfigKey::PinLed, "D1");
    let file = load(&text);

    let (builder, _) = file.builder(Board::NodeMcu).unwrap();
    let config = builder.build(PlaceholderPolicy::Reject).unwrap();
    assert_eq!(config.servo.pin, 4);
    assert_eq!(config.led.pin, 5);

    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    assert_eq!(
        builder.build(PlaceholderPolicy::Reject),
        Err(ConfigError::InvalidPin(ConfigKey::PinServo))
    );
}

#[test]
fn test_header_style_names() {
    let text = deployed_sample()
        .lines()
        .map(|line| match line.split_once('=') {
            Some((key, value)) if !line.starts_with('#') => format!("CONFIG_{key}={value}"),
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n");
    let file = load(&text);
    let (builder, unknown) = file.builder(Board::Esp32C6).unwrap();
    assert!(unknown.is_empty());
    assert!(builder.build(PlaceholderPolicy::Reject).is_ok());
}

#[test]
fn test_generated_code_contains_every_option() {
    let file = load(&deployed_sample());
    let (builder, _) = file.builder(Board::Esp32C6).unwrap();
    let config = builder.build(PlaceholderPolicy::Reject).unwrap();

    let mut code = String::new();
    config.write_rust_consts(&mut code).unwrap();
    for key in ConfigKey::ALL {
        assert!(
            code.contains(&format!("pub const {}:", key.name())),
            "{key}"
        );
    }
    assert!(code.contains("pub const WIFI_PASS: &str = \"correct-horse\";"));
}
