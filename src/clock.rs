//! Time to digit decomposition

use chrono::Timelike;

/// Hour display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourStyle {
    /// 1–12, midnight and noon shown as 12
    TwelveHour,
    /// 0–23
    #[default]
    TwentyFourHour,
}

impl HourStyle {
    /// Map a 24-hour clock hour (0–23) to the hour shown on the display.
    pub fn display_hour(self, hour24: u32) -> u32 {
        match self {
            HourStyle::TwentyFourHour => hour24,
            HourStyle::TwelveHour => match hour24 % 12 {
                0 => 12,
                hour => hour,
            },
        }
    }

    /// The other style.
    pub fn toggled(self) -> Self {
        match self {
            HourStyle::TwelveHour => HourStyle::TwentyFourHour,
            HourStyle::TwentyFourHour => HourStyle::TwelveHour,
        }
    }

    pub fn is_24h(self) -> bool {
        self == HourStyle::TwentyFourHour
    }
}

/// The four digits shown by the watchface, each in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockDigits {
    pub hour_tens: u8,
    pub hour_ones: u8,
    pub minute_tens: u8,
    pub minute_ones: u8,
}

impl ClockDigits {
    /// Split an hour (0–23) and minute (0–59) into display digits.
    pub fn from_hm(hour24: u32, minute: u32, style: HourStyle) -> Self {
        let hour = style.display_hour(hour24 % 24);
        let minute = minute % 60;

        Self {
            hour_tens: (hour / 10) as u8,
            hour_ones: (hour % 10) as u8,
            minute_tens: (minute / 10) as u8,
            minute_ones: (minute % 10) as u8,
        }
    }

    /// Digits for a wall-clock time.
    pub fn from_time<T: Timelike>(time: &T, style: HourStyle) -> Self {
        Self::from_hm(time.hour(), time.minute(), style)
    }

    /// Hour-tens is zero, i.e. the displayed hour is below 10.
    pub fn leading_zero(&self) -> bool {
        self.hour_tens == 0
    }

    /// Whether the hour-tens digit is hidden rather than drawn as `0`.
    ///
    /// Only 12-hour time suppresses the leading zero; 24-hour time always
    /// shows four digits.
    pub fn hides_hour_tens(&self, style: HourStyle) -> bool {
        !style.is_24h() && self.leading_zero()
    }

    /// Digits in slot order: hour-tens, hour-ones, minute-tens, minute-ones.
    pub fn as_array(&self) -> [u8; 4] {
        [
            self.hour_tens,
            self.hour_ones,
            self.minute_tens,
            self.minute_ones,
        ]
    }
}

/// Seconds until the next minute boundary, in `1..=60`.
pub fn secs_until_next_minute<T: Timelike>(time: &T) -> u64 {
    60 - u64::from(time.second() % 60)
}
