use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use swisseph::swe::julday;

use crate::error::{KundaliError, Result};

/// Largest UTC offset in use anywhere (Line Islands, +14:00).
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;
const GREGORIAN: u32 = 1;

/// Local civil birth time plus the offset that takes it to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Signed hours east of Greenwich, e.g. 5.5 for IST.
    pub utc_offset_hours: f64,
}

impl BirthMoment {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_hours: f64,
    ) -> Result<Self> {
        let moment = Self {
            day,
            month,
            year,
            hour,
            minute,
            second,
            utc_offset_hours,
        };
        moment.local_time()?;
        Ok(moment)
    }

    /// Local civil time, validated against the proleptic Gregorian calendar.
    pub fn local_time(&self) -> Result<NaiveDateTime> {
        if !self.utc_offset_hours.is_finite()
            || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(KundaliError::invalid_moment(format!(
                "UTC offset {} is outside [-{MAX_UTC_OFFSET_HOURS}, {MAX_UTC_OFFSET_HOURS}] hours",
                self.utc_offset_hours
            )));
        }
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            KundaliError::invalid_moment(format!(
                "{:04}-{:02}-{:02} is not a calendar date",
                self.year, self.month, self.day
            ))
        })?;
        date.and_hms_opt(self.hour, self.minute, self.second)
            .ok_or_else(|| {
                KundaliError::invalid_moment(format!(
                    "{:02}:{:02}:{:02} is not a valid time of day",
                    self.hour, self.minute, self.second
                ))
            })
    }

    /// The UTC instant: local time minus the offset.
    pub fn reference_instant(&self) -> Result<NaiveDateTime> {
        let local = self.local_time()?;
        let offset_seconds = (self.utc_offset_hours * 3600.0).round() as i64;
        local
            .checked_sub_signed(Duration::seconds(offset_seconds))
            .ok_or_else(|| KundaliError::invalid_moment("reference instant is out of range"))
    }

    /// Julian Day (UT) of the reference instant.
    ///
    /// The fractional day is taken from the reference instant's own clock
    /// fields so the offset is applied exactly once.
    pub fn julian_day(&self) -> Result<f64> {
        let utc = self.reference_instant()?;
        Ok(julian_day_of(utc))
    }
}

/// Gregorian Julian Day for a UTC date and time.
pub fn julian_day_of(utc: NaiveDateTime) -> f64 {
    let hour_decimal = f64::from(utc.hour())
        + f64::from(utc.minute()) / 60.0
        + f64::from(utc.second()) / 3600.0;
    julday(
        utc.year(),
        utc.month() as i32,
        utc.day() as i32,
        hour_decimal,
        GREGORIAN,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_impossible_dates() {
        let err = BirthMoment::new(2001, 2, 30, 10, 0, 0, 5.5).unwrap_err();
        assert!(matches!(err, KundaliError::InvalidBirthMoment { .. }));
        assert!(BirthMoment::new(2001, 13, 1, 10, 0, 0, 5.5).is_err());
        assert!(BirthMoment::new(2001, 1, 1, 24, 0, 0, 5.5).is_err());
        assert!(BirthMoment::new(2001, 1, 1, 10, 60, 0, 5.5).is_err());
    }

    #[test]
    fn test_rejects_bad_offsets() {
        assert!(BirthMoment::new(2001, 1, 1, 10, 0, 0, 15.0).is_err());
        assert!(BirthMoment::new(2001, 1, 1, 10, 0, 0, f64::NAN).is_err());
        assert!(BirthMoment::new(2001, 1, 1, 10, 0, 0, -14.0).is_ok());
    }

    #[test]
    fn test_leap_day() {
        assert!(BirthMoment::new(2000, 2, 29, 0, 0, 0, 0.0).is_ok());
        assert!(BirthMoment::new(1900, 2, 29, 0, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_offset_rolls_back_across_midnight() {
        let moment = BirthMoment::new(2000, 1, 1, 2, 0, 0, 5.5).unwrap();
        let utc = moment.reference_instant().unwrap();
        assert_eq!(utc.to_string(), "1999-12-31 20:30:00");
    }

    #[test]
    fn test_negative_offset_moves_forward() {
        let moment = BirthMoment::new(2000, 1, 1, 22, 15, 30, -4.0).unwrap();
        let utc = moment.reference_instant().unwrap();
        assert_eq!(utc.to_string(), "2000-01-02 02:15:30");
    }

    #[test]
    fn test_julian_day_at_j2000() {
        // 2000-01-01 12:00 UT is JD 2451545.0
        let moment = BirthMoment::new(2000, 1, 1, 17, 30, 0, 5.5).unwrap();
        let jd = moment.julian_day().unwrap();
        assert!((jd - 2_451_545.0).abs() < 1e-9, "{jd}");
    }
}
