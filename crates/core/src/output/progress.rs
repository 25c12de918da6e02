//! Download progress lines.
//!
//! youtube-dl reports progress as
//!
//! ```text
//! [download]  10.8% of 9.22MiB at  5.68MiB/s ETA 00:01
//! [download]  21.7% of 9.22MiB at Unknown speed ETA Unknown ETA
//! [download]   6.2% of ~ 343.72MiB at  420.30KiB/s ETA 12:32 (frag 29/454)
//! ```
//!
//! A line is a progress line only if all four fields are present.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

// At most 18 digits, so every accepted percentage fits `Percentage`.
const PERCENTAGE: &str = r"\b(\d{1,3}(?:\.\d{1,15})?)%";
const FILE_SIZE: &str = r"\s+of\s+~?\s*(\S+)";
// A trailing word ("speed", "B/s") may follow the speed token.
const DOWNLOAD_SPEED: &str = r"\s+at\s+(Unknown|\S+)(?:\s+\S+)*?";
const ETA: &str = r"\s+ETA\s+(Unknown|\d+(?::\d{2})+)";

static PROGRESS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&[PERCENTAGE, FILE_SIZE, DOWNLOAD_SPEED, ETA].concat())
        .expect("progress pattern is valid")
});

/// Exact decimal percentage, kept as integer units and a decimal scale.
///
/// The value is `units / 10^scale`. Trailing fractional zeros are
/// normalised away, so `10.80` and `10.8` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Percentage {
    units: u64,
    scale: u32,
}

impl Percentage {
    /// Creates a percentage equal to `units / 10^scale`.
    pub fn new(units: u64, scale: u32) -> Self {
        let (mut units, mut scale) = (units, scale);
        while scale > 0 && units % 10 == 0 {
            units /= 10;
            scale -= 1;
        }
        Self { units, scale }
    }

    pub fn units(&self) -> u64 {
        self.units
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Lossy conversion for display and arithmetic.
    pub fn as_f64(&self) -> f64 {
        self.units as f64 / 10f64.powi(self.scale as i32)
    }
}

impl FromStr for Percentage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Percentage {
            value: s.to_string(),
        };

        let (whole, fraction) = match s.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !is_digits(whole) || !is_digits(fraction) {
            return Err(invalid());
        }

        let scale = u32::try_from(fraction.len()).map_err(|_| invalid())?;
        let units = format!("{whole}{fraction}")
            .parse::<u64>()
            .map_err(|_| invalid())?;

        Ok(Self::new(units, scale))
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale == 0 {
            return write!(f, "{}", self.units);
        }
        let scale = self.scale as usize;
        let digits = format!("{:0width$}", self.units, width = scale + 1);
        let (whole, fraction) = digits.split_at(digits.len() - scale);
        write!(f, "{whole}.{fraction}")
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One parsed progress line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSample {
    percent_complete: Percentage,
    file_size: String,
    download_speed: String,
    eta: String,
}

impl ProgressSample {
    pub fn new(
        percent_complete: Percentage,
        file_size: impl Into<String>,
        download_speed: impl Into<String>,
        eta: impl Into<String>,
    ) -> Self {
        Self {
            percent_complete,
            file_size: file_size.into(),
            download_speed: download_speed.into(),
            eta: eta.into(),
        }
    }

    /// Whether `line` carries all four progress fields.
    pub fn is_progress_line(line: &str) -> bool {
        PROGRESS_LINE.is_match(line)
    }

    /// Parses a progress line.
    ///
    /// Fails for exactly the lines [`is_progress_line`](Self::is_progress_line)
    /// rejects.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let caps = PROGRESS_LINE
            .captures(line)
            .ok_or_else(|| ParseError::progress(line))?;
        let field = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or_default();

        Ok(Self {
            percent_complete: field(1).parse()?,
            file_size: field(2).to_string(),
            download_speed: field(3).to_string(),
            eta: field(4).to_string(),
        })
    }

    pub fn percent_complete(&self) -> Percentage {
        self.percent_complete
    }

    /// File size token, e.g. `9.22MiB`.
    pub fn file_size(&self) -> &str {
        &self.file_size
    }

    /// Speed token, e.g. `5.68MiB/s`, or `Unknown`.
    pub fn download_speed(&self) -> &str {
        &self.download_speed
    }

    /// ETA token, e.g. `00:01`, or `Unknown`.
    pub fn eta(&self) -> &str {
        &self.eta
    }
}

impl FromStr for ProgressSample {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRESS: &str = "[download]  10.8% of 9.22MiB at  5.68MiB/s ETA 00:01";
    const PROGRESS_UNKNOWN: &str = "[download]  21.7% of 9.22MiB at Unknown speed ETA Unknown ETA";
    const INVALID_PROGRESS: &str = "[download]  abc of 9.22MiBat  5.68MiB/s ETA 00:01";

    #[test]
    fn test_parse_percentage_complete() {
        let sample = ProgressSample::parse(PROGRESS).unwrap();
        assert_eq!(sample.percent_complete(), Percentage::new(108, 1));
        assert_eq!(sample.percent_complete().to_string(), "10.8");
    }

    #[test]
    fn test_parse_all_fields() {
        let sample = ProgressSample::parse(PROGRESS).unwrap();
        assert_eq!(sample.file_size(), "9.22MiB");
        assert_eq!(sample.download_speed(), "5.68MiB/s");
        assert_eq!(sample.eta(), "00:01");
    }

    #[test]
    fn test_parse_without_tag_prefix() {
        let sample = ProgressSample::parse("  10.8% of 9.22MiB at  5.68MiB/s ETA 00:01").unwrap();
        assert_eq!(
            sample,
            ProgressSample::new(Percentage::new(108, 1), "9.22MiB", "5.68MiB/s", "00:01")
        );
    }

    #[test]
    fn test_parse_unknown_speed_and_eta() {
        let sample = ProgressSample::parse(PROGRESS_UNKNOWN).unwrap();
        assert_eq!(sample.percent_complete(), Percentage::new(217, 1));
        assert_eq!(sample.file_size(), "9.22MiB");
        assert_eq!(sample.download_speed(), "Unknown");
        assert_eq!(sample.eta(), "Unknown");
    }

    #[test]
    fn test_parse_yt_dlp_decorations() {
        let line = "[download]   6.2% of ~ 343.72MiB at  420.30KiB/s ETA 12:32 (frag 29/454)";
        let sample = ProgressSample::parse(line).unwrap();
        assert_eq!(sample.file_size(), "343.72MiB");
        assert_eq!(sample.download_speed(), "420.30KiB/s");
        assert_eq!(sample.eta(), "12:32");

        let line = "[download]   0.0% of 3.10GiB at Unknown B/s ETA 01:02:03";
        let sample = ProgressSample::parse(line).unwrap();
        assert_eq!(sample.download_speed(), "Unknown");
        assert_eq!(sample.eta(), "01:02:03");
    }

    #[test]
    fn test_invalid_progress_line() {
        assert!(!ProgressSample::is_progress_line(INVALID_PROGRESS));
        let err = ProgressSample::parse(INVALID_PROGRESS).unwrap_err();
        assert!(matches!(err, ParseError::Progress { .. }));
    }

    #[test]
    fn test_overlong_percentage_is_not_a_progress_line() {
        for line in [
            "[download] 10.12345678901234567890% of 9.22MiB at 5.68MiB/s ETA 00:01",
            "[download] 12345678901234567890% of 9.22MiB at 5.68MiB/s ETA 00:01",
        ] {
            assert!(!ProgressSample::is_progress_line(line), "{line}");
            assert!(ProgressSample::parse(line).is_err(), "{line}");
        }
    }

    #[test]
    fn test_longest_accepted_percentage_parses() {
        let line = "[download] 100.000000000000000% of 9.22MiB at 5.68MiB/s ETA 00:01";
        assert!(ProgressSample::is_progress_line(line));
        let sample = ProgressSample::parse(line).unwrap();
        assert_eq!(sample.percent_complete(), Percentage::new(100, 0));
    }

    #[test]
    fn test_rejects_lines_missing_a_field() {
        for line in [
            "[download] 100% of 9.22MiB in 00:01",
            "[download] Destination: clip.mp4",
            "[download]  10.8% of 9.22MiB ETA 00:01",
            "[youtube] oHg5SJYRHA0: Downloading webpage",
        ] {
            assert!(!ProgressSample::is_progress_line(line), "{line}");
            assert!(ProgressSample::parse(line).is_err(), "{line}");
        }
    }

    #[test]
    fn test_validity_and_parse_agree() {
        for line in [PROGRESS, PROGRESS_UNKNOWN, INVALID_PROGRESS, "", "100%"] {
            assert_eq!(
                ProgressSample::is_progress_line(line),
                ProgressSample::parse(line).is_ok(),
                "{line}"
            );
        }
    }

    #[test]
    fn test_parse_is_repeatable() {
        assert_eq!(
            ProgressSample::parse(PROGRESS).unwrap(),
            ProgressSample::parse(PROGRESS).unwrap()
        );
    }

    #[test]
    fn test_percentage_from_str() {
        assert_eq!("10.80".parse::<Percentage>().unwrap(), Percentage::new(108, 1));
        assert_eq!("100".parse::<Percentage>().unwrap(), Percentage::new(100, 0));
        assert_eq!("0.05".parse::<Percentage>().unwrap().to_string(), "0.05");
        assert_eq!("100.0".parse::<Percentage>().unwrap().to_string(), "100");
        assert!("abc".parse::<Percentage>().is_err());
        assert!("10.".parse::<Percentage>().is_err());
        assert!(".5".parse::<Percentage>().is_err());
        assert!("99999999999999999999999".parse::<Percentage>().is_err());
    }

    #[test]
    fn test_percentage_as_f64() {
        assert!((Percentage::new(108, 1).as_f64() - 10.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sample_serialization() {
        let sample = ProgressSample::parse(PROGRESS).unwrap();
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["percent_complete"], "10.8");
        assert_eq!(json["file_size"], "9.22MiB");
        assert_eq!(json["download_speed"], "5.68MiB/s");
        assert_eq!(json["eta"], "00:01");
    }
}
