// Konfigurations-Report beim Start (nur mit DEBUG = true)
use defmt::{info, warn};
use umbrella_core::{ConfigKey, DetachTime, UmbrellaConfig};

/// Ersatz für Passwörter im Log
const MASK: &str = "********";

fn masked(key: ConfigKey, value: &str) -> &str {
    if key.is_secret() && !value.is_empty() {
        MASK
    } else {
        value
    }
}

/// Gibt die eingebackene Konfiguration über defmt aus
///
/// Passwörter werden maskiert. Ohne `DEBUG` passiert nichts.
pub fn report_config(config: &UmbrellaConfig<'_>) {
    if !config.debug {
        return;
    }

    info!("Config: Servo on GPIO{}", config.servo.pin);
    info!(
        "Config:   down={} deg, up={} deg",
        config.servo.down, config.servo.up
    );
    match config.servo.detach {
        DetachTime::Never => info!("Config:   detach: never"),
        DetachTime::AfterMillis(ms) => info!("Config:   detach after {} ms", ms),
    }

    info!(
        "Config: {} x {} on GPIO{} ({})",
        config.led.num_leds,
        config.led.led_type.name(),
        config.led.pin,
        config.led.color_order.name()
    );
    info!(
        "Config:   fade speed={} offset={}",
        config.led.fade_speed, config.led.offset
    );

    info!("Config: WiFi SSID '{}'", config.wifi.ssid);
    info!(
        "Config:   password '{}'",
        masked(ConfigKey::WifiPass, config.wifi.password)
    );

    info!(
        "Config: MQTT {}:{} as '{}'",
        config.mqtt.host, config.mqtt.port, config.mqtt.client_id
    );
    if config.mqtt.is_anonymous() {
        info!("Config:   anonymous login");
    } else {
        info!(
            "Config:   user '{}' password '{}'",
            config.mqtt.user,
            masked(ConfigKey::MqttPass, config.mqtt.password)
        );
    }
    info!("Config:   topic '{}'", config.mqtt.topic);

    for warning in config.warnings() {
        warn!("Config: {}", warning);
    }
}
