//! Rust-Code Generierung für build.rs
//!
//! Schreibt die validierte Konfiguration als `pub const` Items, die die
//! Firmware per `include!` einbindet.

use core::fmt::{self, Write};

use crate::types::{DetachTime, UmbrellaConfig};

/// Pfad, unter dem die Firmware dieses Crate importiert
const CRATE_PATH: &str = "umbrella_core";

impl UmbrellaConfig<'_> {
    /// Schreibt eine Konstante pro Option plus `CONFIG` mit allen Werten
    pub fn write_rust_consts<W: Write>(&self, out: &mut W) -> fmt::Result {
        let krate = CRATE_PATH;

        writeln!(out, "// Auto-generated from the umbrella configuration - DO NOT EDIT")?;
        writeln!(out)?;

        writeln!(out, "// Pins")?;
        writeln!(out, "pub const PIN_SERVO: u8 = {};", self.servo.pin)?;
        writeln!(out, "pub const PIN_LED: u8 = {};", self.led.pin)?;
        writeln!(out)?;

        writeln!(out, "// Servo")?;
        writeln!(out, "pub const SERVO_DOWN: u8 = {};", self.servo.down)?;
        writeln!(out, "pub const SERVO_UP: u8 = {};", self.servo.up)?;
        match self.servo.detach {
            DetachTime::Never => writeln!(
                out,
                "pub const SERVO_DETACH_TIME: {krate}::DetachTime = {krate}::DetachTime::Never;"
            )?,
            DetachTime::AfterMillis(ms) => writeln!(
                out,
                "pub const SERVO_DETACH_TIME: {krate}::DetachTime = {krate}::DetachTime::AfterMillis({ms});"
            )?,
        }
        writeln!(out)?;

        writeln!(out, "// LED Strip")?;
        writeln!(
            out,
            "pub const COLOR_ORDER: {krate}::ColorOrder = {krate}::ColorOrder::{:?};",
            self.led.color_order
        )?;
        writeln!(
            out,
            "pub const LED_TYPE: {krate}::LedType = {krate}::LedType::{:?};",
            self.led.led_type
        )?;
        writeln!(out, "pub const NUM_LEDS: usize = {};", self.led.num_leds)?;
        writeln!(out, "pub const FADE_SPEED: u8 = {};", self.led.fade_speed)?;
        writeln!(out, "pub const LED_OFFSET: i16 = {};", self.led.offset)?;
        writeln!(out)?;

        writeln!(out, "// WiFi")?;
        writeln!(out, "pub const WIFI_SSID: &str = {:?};", self.wifi.ssid)?;
        writeln!(out, "pub const WIFI_PASS: &str = {:?};", self.wifi.password)?;
        writeln!(out)?;

        writeln!(out, "// MQTT")?;
        writeln!(out, "pub const MQTT_HOST: &str = {:?};", self.mqtt.host)?;
        writeln!(out, "pub const MQTT_PORT: u16 = {};", self.mqtt.port)?;
        writeln!(out, "pub const MQTT_USER: &str = {:?};", self.mqtt.user)?;
        writeln!(out, "pub const MQTT_PASS: &str = {:?};", self.mqtt.password)?;
        writeln!(out, "pub const MQTT_CLIENT_ID: &str = {:?};", self.mqtt.client_id)?;
        writeln!(out, "pub const MQTT_TOPIC: &str = {:?};", self.mqtt.topic)?;
        writeln!(out)?;

        writeln!(out, "pub const DEBUG: bool = {};", self.debug)?;
        writeln!(out)?;

        writeln!(out, "pub const CONFIG: {krate}::UmbrellaConfig<'static> = {krate}::UmbrellaConfig {{")?;
        writeln!(out, "    servo: {krate}::ServoConfig {{")?;
        writeln!(out, "        pin: PIN_SERVO,")?;
        writeln!(out, "        down: SERVO_DOWN,")?;
        writeln!(out, "        up: SERVO_UP,")?;
        writeln!(out, "        detach: SERVO_DETACH_TIME,")?;
        writeln!(out, "    }},")?;
        writeln!(out, "    led: {krate}::LedConfig {{")?;
        writeln!(out, "        pin: PIN_LED,")?;
        writeln!(out, "        color_order: COLOR_ORDER,")?;
        writeln!(out, "        led_type: LED_TYPE,")?;
        writeln!(out, "        num_leds: {},", self.led.num_leds)?;
        writeln!(out, "        fade_speed: FADE_SPEED,")?;
        writeln!(out, "        offset: LED_OFFSET,")?;
        writeln!(out, "    }},")?;
        writeln!(out, "    wifi: {krate}::WifiConfig {{")?;
        writeln!(out, "        ssid: WIFI_SSID,")?;
        writeln!(out, "        password: WIFI_PASS,")?;
        writeln!(out, "    }},")?;
        writeln!(out, "    mqtt: {krate}::MqttConfig {{")?;
        writeln!(out, "        host: MQTT_HOST,")?;
        writeln!(out, "        port: MQTT_PORT,")?;
        writeln!(out, "        user: MQTT_USER,")?;
        writeln!(out, "        password: MQTT_PASS,")?;
        writeln!(out, "        client_id: MQTT_CLIENT_ID,")?;
        writeln!(out, "        topic: MQTT_TOPIC,")?;
        writeln!(out, "    }},")?;
        writeln!(out, "    debug: DEBUG,")?;
        writeln!(out, "}};")
    }
}
