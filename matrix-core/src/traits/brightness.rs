//! Display brightness value
//!
//! The ambient-light controller lives outside this workspace. It reports
//! either a level for the intensity register or "off", which the driver
//! turns into chip commands.

/// Highest value accepted by the intensity register
pub const MAX_INTENSITY: u8 = 15;

/// Requested display brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Brightness {
    /// Blank the display
    Off,
    /// Intensity level (0-15)
    Level(u8),
}

impl Brightness {
    /// Decode the controller's raw output
    ///
    /// Negative values mean off; levels above [`MAX_INTENSITY`] saturate.
    pub fn from_raw(raw: i8) -> Self {
        if raw < 0 {
            Self::Off
        } else {
            Self::Level((raw as u8).min(MAX_INTENSITY))
        }
    }

    /// Intensity register value, `None` when off
    pub fn level(&self) -> Option<u8> {
        match self {
            Self::Off => None,
            Self::Level(level) => Some((*level).min(MAX_INTENSITY)),
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::Level(MAX_INTENSITY)
    }
}
