//! Pure Logic Functions für die LED-Verdrahtung
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::{Channel, ColorOrder, LedConfig};

fn channel(color: RGB8, channel: Channel) -> u8 {
    match channel {
        Channel::Red => color.r,
        Channel::Green => color.g,
        Channel::Blue => color.b,
    }
}

/// Bytes einer Farbe in der Reihenfolge, in der sie gesendet werden
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use umbrella_core::{wire_bytes, ColorOrder};
/// let red = RGB8 { r: 10, g: 0, b: 0 };
/// assert_eq!(wire_bytes(red, ColorOrder::Grb), [0, 10, 0]);
/// ```
pub fn wire_bytes(color: RGB8, order: ColorOrder) -> [u8; 3] {
    order.channels().map(|c| channel(color, c))
}

/// Farbe für einen Treiber mit fester Kanal-Reihenfolge umsortieren
///
/// Treiber wie der WS2812-Adapter senden immer in ihrer eigenen
/// Reihenfolge (`native`). Das Ergebnis ist so gewählt, dass auf der
/// Leitung trotzdem `wire_bytes(color, wanted)` ankommt.
pub fn remap_for_driver(color: RGB8, wanted: ColorOrder, native: ColorOrder) -> RGB8 {
    let wire = wire_bytes(color, wanted);
    let mut out = RGB8::default();
    for (byte, slot) in wire.into_iter().zip(native.channels()) {
        match slot {
            Channel::Red => out.r = byte,
            Channel::Green => out.g = byte,
            Channel::Blue => out.b = byte,
        }
    }
    out
}

/// Physischer LED-Index für einen logischen Index
///
/// Verschiebt um `LED_OFFSET` und bleibt immer im Strip.
pub fn physical_index(logical: u16, led: &LedConfig) -> u16 {
    let len = u32::from(led.num_leds);
    ((u32::from(logical) + u32::from(led.effective_offset())) % len) as u16
}

/// Frame mit genau einer leuchtenden LED an der Mitte der Animation
///
/// Logischer Index 0 landet nach `LED_OFFSET` auf der physischen LED.
/// Damit lassen sich Ausrichtung und `COLOR_ORDER` am Gerät prüfen.
pub fn marker_frame(led: &LedConfig, color: RGB8) -> impl Iterator<Item = RGB8> {
    let center = physical_index(0, led);
    (0..led.num_leds).map(move |i| if i == center { color } else { RGB8::default() })
}
