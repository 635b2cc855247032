//! Analog clock hand angles.

use chrono::Timelike;
use serde::Serialize;

/// Rotation of each hand in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HandAngles {
    /// 30° per hour position plus 0.5° per minute.
    pub hour: f64,
    /// 6° per minute plus the fractional minute from seconds.
    pub minute: f64,
    /// 6° per second.
    pub second: f64,
}

impl HandAngles {
    /// Angles for a wall-clock reading.
    #[must_use]
    pub fn at<T: Timelike>(time: &T) -> Self {
        let hours = f64::from(time.hour() % 12);
        let minutes = f64::from(time.minute());
        let seconds = f64::from(time.second());

        Self {
            hour: hours.mul_add(30.0, minutes * 0.5),
            minute: (minutes + seconds / 60.0) * 6.0,
            second: seconds * 6.0,
        }
    }
}
