//! Erkennung nicht ersetzter Platzhalter
//!
//! Die Beispiel-Konfiguration enthält Marker wie `{WIFI-SSID}` oder
//! `{MQTT-SERVER}`, die vor dem Deployment ersetzt werden müssen.

/// Ist der Wert ein Platzhalter der Form `{NAME}`?
///
/// `NAME` besteht aus Großbuchstaben, Ziffern, `-` und `_`.
///
/// ```
/// # use umbrella_core::is_placeholder;
/// assert!(is_placeholder("{WIFI-SSID}"));
/// assert!(!is_placeholder("home/umbrella"));
/// ```
pub fn is_placeholder(value: &str) -> bool {
    let Some(inner) = value
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return false;
    };

    !inner.is_empty()
        && inner
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// Steckt irgendwo im Wert noch ein Platzhalter?
///
/// Erkennt auch halb ersetzte Werte wie `mqtt://{MQTT-SERVER}`.
///
/// ```
/// # use umbrella_core::contains_placeholder;
/// assert!(contains_placeholder("{WIFI-SSID}-5G"));
/// assert!(!contains_placeholder("HomeNet-5G"));
/// ```
pub fn contains_placeholder(value: &str) -> bool {
    value.match_indices('{').any(|(start, _)| {
        value[start..]
            .find('}')
            .is_some_and(|end| is_placeholder(&value[start..=start + end]))
    })
}
