// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::AnyPin;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use umbrella_firmware::config::{CONFIG, IDLE_INTERVAL_SECS, PIN_LED, PIN_SERVO};
use umbrella_firmware::report_config;
use umbrella_firmware::tasks::led_strip_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime, gibt die eingebackene
/// Konfiguration aus und bringt den LED-Strip in den Einschalt-Zustand.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    defmt::info!("Umbrella: firmware started");
    report_config(&CONFIG);

    // LED-Pin kommt aus der Konfiguration, nicht aus einem festen GPIO-Feld.
    // SAFETY: build.rs hat geprüft, dass PIN_LED ein nutzbarer GPIO ist, und
    // kein anderer Code in dieser Firmware greift auf diesen Pin zu.
    let led_pin = unsafe { AnyPin::steal(PIN_LED) };

    // Spawn LED Task
    if spawner
        .spawn(led_strip_task(led_pin, peripherals.RMT))
        .is_err()
    {
        defmt::error!("Umbrella: failed to spawn LED task");
    }

    // Servo-Pin ist reserviert, die Ansteuerung liegt außerhalb dieser Firmware
    defmt::info!("Umbrella: servo pin GPIO{} reserved", PIN_SERVO);

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(IDLE_INTERVAL_SECS)).await;
    }
}
