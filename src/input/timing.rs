//! Measuring and printing the runtime of the calculation

use std::fmt;
use chrono::{DateTime, TimeZone};

/// Wrapper around std::time::Duration
pub struct PrettyDuration {
    pub duration: std::time::Duration,
}

impl From<std::time::Duration> for PrettyDuration {
    fn from(duration: std::time::Duration) -> PrettyDuration {
        PrettyDuration {duration}
    }
}

impl fmt::Display for PrettyDuration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut t = self.duration.as_secs();
        let s = t % 60;
        t /= 60;
        let min = t % 60;
        t /= 60;
        let hr = t % 24;
        let d = t / 24;
        if d > 0 {
            write!(f, "{}d {:02}:{:02}:{:02}", d, hr, min, s)
        } else {
            write!(f, "{:02}:{:02}:{:02}", hr, min, s)
        }
    }
}

/// Wrapper around a wall-clock time, printed as `YYYY/MM/DD hh:mm:ss`
pub struct WallClock<Tz: TimeZone>(pub DateTime<Tz>);

impl<Tz: TimeZone> fmt::Display for WallClock<Tz> where Tz::Offset: fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y/%m/%d %H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use chrono::Utc;
    use super::*;

    #[test]
    fn duration_format() {
        let output = PrettyDuration::from(Duration::from_secs(3 * 3600 + 25 * 60 + 7)).to_string();
        println!("\"{}\"", output);
        assert_eq!(output, "03:25:07");

        let output = PrettyDuration::from(Duration::from_secs(2 * 86400 + 59)).to_string();
        println!("\"{}\"", output);
        assert_eq!(output, "2d 00:00:59");
    }

    #[test]
    fn wall_clock_format() {
        let t = Utc.with_ymd_and_hms(2022, 7, 4, 9, 5, 30).unwrap();
        let output = WallClock(t).to_string();
        println!("\"{}\"", output);
        assert_eq!(output, "2022/07/04 09:05:30");
    }
}
