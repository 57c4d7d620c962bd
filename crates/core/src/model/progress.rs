use std::fmt;

/// Overall completion as an integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Progress(u8);

impl Progress {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    /// Value shown before anything has been saved.
    pub const DEFAULT: Progress = Progress(40);

    /// Round to the nearest integer, then clamp into `0..=100`.
    ///
    /// NaN becomes 0; infinities saturate at the bounds.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        let rounded = value.round().clamp(f64::from(Self::MIN), f64::from(Self::MAX));
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        let percent = rounded as u8;
        Self(percent)
    }

    /// Parse free-form input. Blank or non-numeric text counts as 0.
    #[must_use]
    pub fn parse_input(raw: &str) -> Self {
        Self::from_f64(parse_number(raw).unwrap_or(0.0))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Width of the fill bar as a CSS percentage.
    #[must_use]
    pub fn fill_width(self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Lenient number parsing: surrounding whitespace is ignored and an empty
/// string is `None`.
///
/// Only numeric literals are accepted; the `inf`/`nan` spellings that
/// `f64::from_str` also takes are `None`.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.is_empty() || unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
