// Build-Script: Wird vor dem Kompilieren ausgeführt
// Validiert die Umbrella-Konfiguration, generiert die Konstanten
// und konfiguriert den Linker für ESP32-C6 Embedded Rust

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process;

use umbrella_core::{Board, ConfigError, ConfigWarning, EnvFile, PlaceholderPolicy};

/// Board, für das diese Firmware gebaut wird
const BOARD: Board = Board::Esp32C6;

/// Name der generierten Datei in OUT_DIR
const GENERATED_FILE: &str = "umbrella_config.rs";

fn main() {
    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    // (beendet den Prozess, wenn wir vom Linker aufgerufen werden)
    linker_be_nice();

    println!("cargo:rerun-if-env-changed=UMBRELLA_CONFIG");
    println!("cargo:rerun-if-env-changed=UMBRELLA_DEPLOY");

    // Konfiguration laden und prüfen, danach Konstanten nach OUT_DIR schreiben
    if let Err(message) = generate_config() {
        eprintln!();
        eprintln!("❌ Umbrella-Konfiguration ungültig: {message}");
        eprintln!("   Siehe .env.example für alle Optionen");
        eprintln!();
        process::exit(1);
    }

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

/// Lädt die Konfiguration, validiert sie und schreibt `umbrella_config.rs`
fn generate_config() -> Result<(), String> {
    let env_file = load_env_file()?;
    let policy = placeholder_policy();

    for warning in env_file.warnings() {
        println!("cargo:warning={warning}");
    }

    let (builder, unknown) = env_file.builder(BOARD).map_err(|e| describe(BOARD, e))?;
    for name in unknown {
        println!("cargo:warning=Unbekannte Option `{name}` wird ignoriert");
    }

    let config = builder
        .build(policy)
        .map_err(|e| describe(builder.board(), e))?;
    for warning in config.warnings() {
        // Platzhalter sind im Release-Build bereits ein Fehler
        if matches!(warning, ConfigWarning::PlaceholderValue(_)) {
            println!("cargo:warning={warning} (erlaubt, weil kein Release-Build)");
        } else {
            println!("cargo:warning={warning}");
        }
    }

    let mut code = String::new();
    config
        .write_rust_consts(&mut code)
        .map_err(|e| e.to_string())?;

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR nicht gesetzt")?);
    fs::write(out_dir.join(GENERATED_FILE), code).map_err(|e| e.to_string())?;

    Ok(())
}

/// Fehlertext mit betroffener Option und Board
fn describe(board: Board, error: ConfigError) -> String {
    match error.key() {
        Some(key) => format!("{error} (Option `{key}`, Board {})", board.name()),
        None => format!("{error} (Board {})", board.name()),
    }
}

/// Quelle der Konfiguration:
/// 1. Datei aus `UMBRELLA_CONFIG`
/// 2. `.env` im Crate-Verzeichnis
/// 3. Environment-Variablen (z.B. in CI)
fn load_env_file() -> Result<EnvFile, String> {
    if let Some(path) = env::var_os("UMBRELLA_CONFIG") {
        let path = PathBuf::from(path);
        println!("cargo:rerun-if-changed={}", path.display());
        return EnvFile::from_path(&path).map_err(|e| format!("{}: {e}", path.display()));
    }

    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").ok_or("CARGO_MANIFEST_DIR nicht gesetzt")?;
    let path = PathBuf::from(manifest_dir).join(".env");
    println!("cargo:rerun-if-changed={}", path.display());

    match EnvFile::from_path(&path) {
        Ok(file) => Ok(file),
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
            println!("cargo:warning=.env file nicht gefunden, nutze Environment-Variablen");
            let file = EnvFile::from_process_env();
            if file.is_empty() {
                return Err("weder .env noch Environment-Variablen gefunden".into());
            }
            Ok(file)
        }
        Err(e) => Err(format!("{}: {e}", path.display())),
    }
}

/// Release-Builds (oder `UMBRELLA_DEPLOY`) dürfen keine Platzhalter enthalten
fn placeholder_policy() -> PlaceholderPolicy {
    let release = env::var("PROFILE").is_ok_and(|profile| profile == "release");
    let deploy = env::var_os("UMBRELLA_DEPLOY").is_some();

    if release || deploy {
        PlaceholderPolicy::Reject
    } else {
        PlaceholderPolicy::Allow
    }
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        if kind == "undefined-symbol" {
            if what.starts_with("_defmt_") {
                eprintln!();
                eprintln!("💡 `defmt` not found - make sure `defmt.x` is added as a linker script");
                eprintln!();
            } else if what == "_stack_start" {
                eprintln!();
                eprintln!("💡 Is the linker script `linkall.x` missing?");
                eprintln!();
            } else if what.starts_with("esp_rtos_") {
                eprintln!();
                eprintln!("💡 `esp-rtos` has not been started - call `esp_rtos::start` in main");
                eprintln!();
            }
            process::exit(0);
        }

        // we don't have anything helpful for "missing-lib" yet
        process::exit(1);
    }

    match env::current_exe() {
        Ok(exe) => println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        ),
        Err(e) => println!("cargo:warning=Linker-Hilfe nicht verfügbar: {e}"),
    }
}
