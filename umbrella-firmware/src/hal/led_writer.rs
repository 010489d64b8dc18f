// LED-Strip Writer für den RMT Peripheral
//
// Implementiert den LedStripWriter Trait aus umbrella-core für einen
// WS2812-kompatiblen Strip mit NUM_LEDS LEDs.

use esp_hal::Blocking;
use esp_hal::gpio::AnyPin;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;
use umbrella_core::{ColorOrder, LedError, LedStripWriter, remap_for_driver};

use crate::config::{DRIVER_COLOR_ORDER, LED_BUFFER_SIZE, NUM_LEDS};

/// Real Hardware LED Writer
///
/// Nutzt ESP32 RMT Peripheral um den Strip anzusteuern.
/// Farben werden vor dem Senden in die konfigurierte `COLOR_ORDER`
/// gebracht, der Adapter selbst sendet immer GRB.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtLedWriter<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    color_order: ColorOrder,
}

impl<'a> RmtLedWriter<'a> {
    /// Erstellt einen neuen RmtLedWriter
    ///
    /// # Parameter
    /// - `pin`: Datenleitung (PIN_LED)
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `color_order`: Kanal-Reihenfolge des Strips
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(NUM_LEDS) Macro)
    pub fn new(
        pin: AnyPin<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        color_order: ColorOrder,
        buffer: &'a mut [PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::WriteFailed)?;

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, pin, buffer);

        Ok(Self { led, color_order })
    }
}

impl LedStripWriter for RmtLedWriter<'_> {
    fn len(&self) -> usize {
        NUM_LEDS
    }

    fn write<I>(&mut self, pixels: I) -> Result<(), LedError>
    where
        I: IntoIterator<Item = RGB8>,
    {
        let order = self.color_order;
        let frame = pixels
            .into_iter()
            .take(NUM_LEDS)
            .map(|color| remap_for_driver(color, order, DRIVER_COLOR_ORDER));

        self.led.write(frame).map_err(|_| LedError::WriteFailed)
    }
}
