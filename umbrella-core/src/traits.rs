//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für den Zugriff auf einen adressierbaren LED-Strip
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait LedStripWriter: Send {
    /// Anzahl LEDs am Strip
    fn len(&self) -> usize;

    /// Schreibt einen Frame, ein Pixel pro LED ab Index 0
    ///
    /// Farben sind logische RGB-Werte. Die Kanal-Reihenfolge auf der
    /// Leitung ist Sache der Implementierung.
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write<I>(&mut self, pixels: I) -> Result<(), LedError>
    where
        I: IntoIterator<Item = RGB8>;

    /// Schaltet alle LEDs aus
    fn clear(&mut self) -> Result<(), LedError> {
        let len = self.len();
        self.write(core::iter::repeat_n(RGB8::default(), len))
    }
}
