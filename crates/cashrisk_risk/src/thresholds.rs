//! Alert thresholds on the headline KPIs.

use std::fmt;

use crate::kpi::RiskKpis;

/// Default alert when the p5 runway is this many days or fewer.
pub const DEFAULT_RUNWAY_ALERT_DAYS: u32 = 30;

/// Default alert when the overdraft probability reaches this level.
pub const DEFAULT_OVERDRAFT_ALERT: f64 = 0.2;

/// Levels at which a run is flagged.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RiskThresholds {
    /// Flag a finite p5 runway at or below this many days.
    pub runway_days: u32,
    /// Flag an overdraft probability at or above this share.
    pub overdraft_probability: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            runway_days: DEFAULT_RUNWAY_ALERT_DAYS,
            overdraft_probability: DEFAULT_OVERDRAFT_ALERT,
        }
    }
}

/// A threshold breached by a run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "flag", rename_all = "snake_case"))]
pub enum RiskFlag {
    /// The pessimistic projection runs out of cash too soon.
    ShortRunway {
        /// Observed p5 runway.
        days: u32,
        /// Configured threshold.
        threshold: u32,
    },
    /// Too many paths are overdrawn at some point.
    HighOverdraftProbability {
        /// Observed probability.
        probability: f64,
        /// Configured threshold.
        threshold: f64,
    },
}

impl fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFlag::ShortRunway { days, threshold } => {
                write!(f, "p5 runway of {} days is within {} days", days, threshold)
            }
            RiskFlag::HighOverdraftProbability {
                probability,
                threshold,
            } => write!(
                f,
                "overdraft probability {:.1}% is at or above {:.1}%",
                probability * 100.0,
                threshold * 100.0
            ),
        }
    }
}

impl RiskKpis {
    /// Lists every threshold the KPIs breach.
    pub fn breaches(&self, thresholds: &RiskThresholds) -> Vec<RiskFlag> {
        let mut flags = Vec::new();
        if let Some(days) = self.runway_days_p5 {
            if days <= thresholds.runway_days {
                flags.push(RiskFlag::ShortRunway {
                    days,
                    threshold: thresholds.runway_days,
                });
            }
        }
        if self.probability_overdraft >= thresholds.overdraft_probability {
            flags.push(RiskFlag::HighOverdraftProbability {
                probability: self.probability_overdraft,
                threshold: thresholds.overdraft_probability,
            });
        }
        flags
    }
}
