//! General system configuration

use embassy_nrf::config::{Config, Debug, HfclkSource, LfclkSource};
use quadrant_clock::ClockConfig;

/// Backlight level used while the watchface is shown (0–7)
const BACKLIGHT_LEVEL: u8 = 2;

pub struct SystemConfig {
    /// Chip configuration passed to `embassy_nrf::init`
    pub chip: Config,
    /// Watchface shape, variant and initial hour style
    pub clock: ClockConfig,
    pub backlight: u8,
}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Self {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut chip = Config::default();

        // Set high-frequency and low-frequency clock sources to external
        chip.hfclk_source = HfclkSource::ExternalXtal;
        chip.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        chip.dcdc.reg1 = true;

        // Allow debugging
        chip.debug = Debug::Allowed;

        Self {
            chip,
            clock: ClockConfig::from_features(),
            backlight: BACKLIGHT_LEVEL,
        }
    }
}
