use serde::{Deserialize, Serialize};

/// Three-level classification used by stat panel bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatLevel {
    Critical,
    Warning,
    Nominal,
}

impl StatLevel {
    /// Values strictly below this are critical.
    pub const CRITICAL_BELOW: i64 = 20;
    /// Values strictly below this (and not critical) are a warning.
    pub const WARNING_BELOW: i64 = 50;

    pub fn classify(value: i64) -> Self {
        if value < Self::CRITICAL_BELOW {
            StatLevel::Critical
        } else if value < Self::WARNING_BELOW {
            StatLevel::Warning
        } else {
            StatLevel::Nominal
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            StatLevel::Critical => "#ff4444",
            StatLevel::Warning => "#ffbb33",
            StatLevel::Nominal => "#00C851",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatLevel::Critical => "critical",
            StatLevel::Warning => "warning",
            StatLevel::Nominal => "nominal",
        }
    }
}

/// How a hunger value maps onto [`StatLevel`].
///
/// `Direct` treats hunger like any other stat (low is bad). `Inverted` treats
/// a full stomach as good: it classifies `100 - value` (saturating) with the
/// same thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HungerScale {
    #[default]
    Direct,
    Inverted,
}

impl HungerScale {
    pub fn classify(self, value: i64) -> StatLevel {
        match self {
            HungerScale::Direct => StatLevel::classify(value),
            HungerScale::Inverted => StatLevel::classify(100i64.saturating_sub(value)),
        }
    }
}

/// Two-level classification used by the HUD health bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HpBand {
    Good,
    Bad,
}

impl HpBand {
    /// Good only above half health; exactly 50% is already bad.
    pub fn from_percent(percent: i64) -> Self {
        if percent > 50 { HpBand::Good } else { HpBand::Bad }
    }

    pub fn color(self) -> &'static str {
        match self {
            HpBand::Good => "#00C851",
            HpBand::Bad => "#ff4444",
        }
    }
}

/// Whole-number share of `max` held by `value`, rounded down.
/// Zero when `max` is not positive. Not clamped.
pub fn percent_of(value: i64, max: i64) -> i64 {
    if max <= 0 {
        return 0;
    }
    value.saturating_mul(100).div_euclid(max)
}

/// Width of a bar fill in percent. Out-of-range values clip visually.
pub fn bar_width(value: i64) -> i64 {
    value.clamp(0, 100)
}
