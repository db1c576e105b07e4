use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Axis of comparison between providers.
///
/// Declaration order is the canonical allow-list order; weight sets and
/// reasoning fragments follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Price,
    Efficiency,
    Speed,
    Reliability,
    Security,
    Scalability,
    GlobalReach,
    Support,
    ServiceVariety,
    EaseOfUse,
    Sustainability,
}

/// Neutral value used when a candidate does not carry a requested metric.
pub const NEUTRAL_METRIC: f64 = 50.0;

impl Criterion {
    pub const fn ordered() -> [Self; 11] {
        [
            Self::Price,
            Self::Efficiency,
            Self::Speed,
            Self::Reliability,
            Self::Security,
            Self::Scalability,
            Self::GlobalReach,
            Self::Support,
            Self::ServiceVariety,
            Self::EaseOfUse,
            Self::Sustainability,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Efficiency => "efficiency",
            Self::Speed => "speed",
            Self::Reliability => "reliability",
            Self::Security => "security",
            Self::Scalability => "scalability",
            Self::GlobalReach => "global_reach",
            Self::Support => "support",
            Self::ServiceVariety => "service_variety",
            Self::EaseOfUse => "ease_of_use",
            Self::Sustainability => "sustainability",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|criterion| criterion.key() == key)
    }

    /// Key with underscores replaced by spaces, used in reasoning text.
    pub fn label(self) -> String {
        self.key().replace('_', " ")
    }

    /// Maps a raw metric onto the common "higher is better" 0-100 band.
    pub fn transform(self, raw: f64) -> f64 {
        let transformed = match self {
            // price encodes cost, lower is better
            Self::Price => 100.0 - raw,
            // reliability is an uptime percentage
            Self::Reliability => (raw / 100.0 * 100.0).min(100.0),
            _ => raw,
        };
        transformed.clamp(0.0, 100.0)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown criterion '{0}'")]
pub struct UnknownCriterion(pub String);

impl FromStr for Criterion {
    type Err = UnknownCriterion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_key(value.trim()).ok_or_else(|| UnknownCriterion(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_key() {
        for criterion in Criterion::ordered() {
            assert_eq!(Criterion::from_key(criterion.key()), Some(criterion));
        }
        assert_eq!(Criterion::from_key("latency"), None);
        assert!("Price".parse::<Criterion>().is_err());
    }

    #[test]
    fn price_is_inverted_and_clamped() {
        assert_eq!(Criterion::Price.transform(75.0), 25.0);
        assert_eq!(Criterion::Price.transform(120.0), 0.0);
        assert_eq!(Criterion::Price.transform(-10.0), 100.0);
    }

    #[test]
    fn reliability_is_capped_at_one_hundred() {
        assert!((Criterion::Reliability.transform(99.95) - 99.95).abs() < 1e-9);
        assert_eq!(Criterion::Reliability.transform(140.0), 100.0);
    }

    #[test]
    fn other_metrics_pass_through_within_band() {
        assert_eq!(Criterion::Speed.transform(93.0), 93.0);
        assert_eq!(Criterion::Support.transform(130.0), 100.0);
        assert_eq!(Criterion::Support.transform(-1.0), 0.0);
    }

    #[test]
    fn label_humanizes_underscores() {
        assert_eq!(Criterion::GlobalReach.label(), "global reach");
        assert_eq!(Criterion::EaseOfUse.to_string(), "ease_of_use");
    }
}
