// LED Strip Task - Einschalt-Zustand des LED-Rings über RMT Peripheral
use defmt::{error, info, warn};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::AnyPin;
use esp_hal_smartled::smart_led_buffer;
use rgb::RGB8;
use umbrella_core::{LedConfig, marker_frame, physical_index};

use crate::config::{CONFIG, NUM_LEDS, RMT_CLOCK_MHZ};
use crate::hal::{LedStripWriter, RmtLedWriter};

/// Helligkeit der Kalibrier-Markierung (0-255)
/// Wert ist gedimmt für Augenschonung
pub const MARKER_BRIGHTNESS: u8 = 10;

/// Wie lange die Markierung im Debug-Modus sichtbar bleibt
pub const MARKER_DURATION_SECS: u64 = 3;

/// LED Strip Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// - Schaltet beim Start alle LEDs aus
/// - Im Debug-Modus: zeigt kurz eine rote Markierung an der Mitte der
///   Animation (logische LED 0 nach `LED_OFFSET`). Leuchtet sie nicht rot
///   oder an der falschen Stelle, stimmen `COLOR_ORDER` bzw. `LED_OFFSET` nicht.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `L: LedStripWriter` ermöglicht:
/// - Real Hardware (RmtLedWriter) im Production-Code
/// - Mock Implementation (MockLedWriter) in Tests
pub async fn led_strip_logic<L: LedStripWriter>(mut led: L, config: LedConfig, debug: bool) {
    if let Err(e) = led.clear() {
        error!("LED: Failed to clear strip: {}", e);
        return;
    }
    info!("LED: {} LEDs cleared", led.len());

    if !debug {
        return;
    }

    let marker = RGB8 {
        r: MARKER_BRIGHTNESS,
        g: 0,
        b: 0,
    };
    info!(
        "LED: Showing center marker on LED {} for {}s",
        physical_index(0, &config),
        MARKER_DURATION_SECS
    );
    if let Err(e) = led.write(marker_frame(&config, marker)) {
        warn!("LED: Failed to show marker: {}", e);
    }

    Timer::after(Duration::from_secs(MARKER_DURATION_SECS)).await;

    if let Err(e) = led.clear() {
        error!("LED: Failed to clear strip: {}", e);
    }
}

/// LED Strip Task - Embassy Task für parallele Ausführung
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `led_strip_logic()` Funktion auf.
///
/// # Parameter
/// - `led_pin`: GPIO aus `PIN_LED`
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[embassy_executor::task]
pub async fn led_strip_task(
    led_pin: AnyPin<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    // Buffer für SmartLED Daten erstellen (NUM_LEDS LEDs)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(NUM_LEDS);

    let config = CONFIG;

    // Hardware initialisieren: RmtLedWriter kapselt RMT + SmartLED
    let led = match RmtLedWriter::new(
        led_pin,
        rmt_peripheral,
        RMT_CLOCK_MHZ,
        config.led.color_order,
        &mut rmt_buffer,
    ) {
        Ok(led) => led,
        Err(e) => {
            error!("LED: Failed to initialize RMT: {}", e);
            return;
        }
    };

    led_strip_logic(led, config.led, config.debug).await;
}
