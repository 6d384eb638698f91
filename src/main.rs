#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pin, Pull},
    peripherals::SPI2,
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, channel::Channel};
use embassy_time::{Duration, Instant, Timer};

bind_interrupts!(struct Irqs {
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, button::Button, display::Display};
use system::{
    config::SystemConfig,
    time::{TimeManager, TimeReference},
};

// Watchface
use quadrant_clock::{
    clock::secs_until_next_minute,
    ui::{TextWatchface, WatchFace, WatchFaceState, Watchface},
    HourStyle,
};

// Others
use chrono::Timelike;

// Include the build host's UTC epoch and local offset at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));

/// Reasons to touch the LCD
#[derive(Clone, Copy, defmt::Format)]
enum Event {
    /// A minute boundary passed (or the watch just booted)
    Tick,
    /// The user switched between 12h and 24h time
    ToggleHourStyle,
}

// Communication channels
static EVENTS: Channel<ThreadModeRawMutex, Event, 4> = Channel::new();

/// Wake up on every minute boundary, starting right away.
#[embassy_executor::task(pool_size = 1)]
async fn tick_minutes(clock: TimeManager) {
    loop {
        EVENTS.send(Event::Tick).await;

        // Re-schedule the timer interrupt at the next full minute
        let now = clock.get_time();
        Timer::after(Duration::from_secs(secs_until_next_minute(&now))).await;
    }
}

/// Polls the button state every 10ms
#[embassy_executor::task(pool_size = 1)]
async fn poll_button(mut button: Button) {
    loop {
        if button.pressed().await {
            defmt::info!("Button pressed");
            EVENTS.send(Event::ToggleHourStyle).await;
        }

        // Re-schedule the timer interrupt in 10ms
        Timer::after(Duration::from_millis(10)).await;
    }
}

/// Redraw the watchface whenever the time or the hour style changes.
#[embassy_executor::task(pool_size = 1)]
async fn update_lcd(
    backlight: Backlight,
    mut display: Display,
    mut face: Watchface,
    clock: TimeManager,
    mut hour_style: HourStyle,
) {
    // The backlight stays on for as long as the watchface is shown
    defmt::debug!("Backlight at level {}", backlight.brightness());

    loop {
        match EVENTS.receive().await {
            Event::Tick => {}
            Event::ToggleHourStyle => {
                hour_style = hour_style.toggled();
                defmt::info!("Hour style: {}", hour_style);
            }
        }

        let state = WatchFaceState {
            time: clock.get_time(),
            hour_style,
        };
        defmt::info!(
            "Current time: {}:{}",
            state.time.hour(),
            state.time.minute()
        );

        if let Err(e) = face.update_time(&state) {
            defmt::error!("Watchface update failed: {}", e);
            continue;
        }
        if let Err(e) = display.render(&mut face) {
            defmt::error!("LCD update failed: {}", e);
            // Whatever made it to the panel is unknown now
            face.invalidate();
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let config = SystemConfig::new();
    let p = embassy_nrf::init(config.chip);
    defmt::info!("Initializing");

    // Initialize Backlight
    let backlight = unwrap!(Backlight::init(
        Output::new(p.P0_14.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_22.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_23.degrade(), Level::High, OutputDrive::Standard),
        config.backlight,
    ));

    // Initialize Button
    let button = Button::init(
        Input::new(p.P0_13.degrade(), Pull::None),
        Output::new(p.P0_15.degrade(), Level::Low, OutputDrive::Standard),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = unwrap!(Display::init(
        spim,
        Output::new(p.P0_25.degrade(), Level::High, OutputDrive::Standard),
        Output::new(p.P0_18.degrade(), Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26.degrade(), Level::Low, OutputDrive::Standard),
    ));

    // Load the watchface, the font-rendered one cannot fail to load
    let face = match Watchface::load(&config.clock, display.bounds()) {
        Ok(face) => face,
        Err(e) => {
            defmt::error!("Failed to load watchface: {}, using text digits", e);
            Watchface::Text(unwrap!(TextWatchface::load(
                display.bounds(),
                config.clock.shape
            )))
        }
    };
    defmt::info!("Watchface: {} ({})", face.variant(), config.clock.shape);

    // Start the clock from the build time reference
    let reference = unwrap!(TimeReference::from_timestamp(
        UTC_EPOCH,
        UTC_OFFSET,
        Instant::now()
    ));
    let clock = TimeManager::init(reference);

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(update_lcd(
        backlight,
        display,
        face,
        clock,
        config.clock.hour_style
    )));
    unwrap!(spawner.spawn(poll_button(button)));
    unwrap!(spawner.spawn(tick_minutes(clock)));
}
