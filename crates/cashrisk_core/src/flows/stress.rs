//! Stress adjustments applied to row legs before aggregation.

use crate::types::FlowError;

/// Longest accepted receipt delay, ten years of calendar days.
pub const MAX_DSO_DAYS: u32 = 3_650;

/// Volume, cost and receivable-timing stress.
///
/// `sales_pct` and `costs_pct` are percentage changes (`10.0` means +10%).
/// `dso_days` delays every inflow by that many calendar days while
/// outflows stay on their original day.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StressParams {
    /// Percentage change applied to inflows.
    pub sales_pct: f64,
    /// Percentage change applied to outflows.
    pub costs_pct: f64,
    /// Receipt delay in days.
    pub dso_days: u32,
}

impl StressParams {
    /// No stress: identity multipliers and no delay.
    pub fn none() -> Self {
        Self::default()
    }

    /// Multiplier applied to inflows.
    #[inline]
    pub fn inflow_factor(&self) -> f64 {
        1.0 + self.sales_pct / 100.0
    }

    /// Multiplier applied to outflows.
    #[inline]
    pub fn outflow_factor(&self) -> f64 {
        1.0 + self.costs_pct / 100.0
    }

    /// Checks that both percentages are finite and not below -100%, and
    /// that the receipt delay does not exceed [`MAX_DSO_DAYS`].
    pub fn validate(&self) -> Result<(), FlowError> {
        for (name, value) in [("sales_pct", self.sales_pct), ("costs_pct", self.costs_pct)] {
            if !value.is_finite() || value < -100.0 {
                return Err(FlowError::InvalidStress { name, value });
            }
        }
        if self.dso_days > MAX_DSO_DAYS {
            return Err(FlowError::InvalidStress {
                name: "dso_days",
                value: f64::from(self.dso_days),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        let stress = StressParams {
            sales_pct: -20.0,
            costs_pct: 10.0,
            dso_days: 0,
        };
        assert!((stress.inflow_factor() - 0.8).abs() < 1e-12);
        assert!((stress.outflow_factor() - 1.1).abs() < 1e-12);
        assert_eq!(StressParams::none().inflow_factor(), 1.0);
    }

    #[test]
    fn test_validate() {
        assert!(StressParams::none().validate().is_ok());
        assert!(StressParams {
            sales_pct: -100.0,
            ..Default::default()
        }
        .validate()
        .is_ok());

        let err = StressParams {
            costs_pct: -150.0,
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, FlowError::InvalidStress { name: "costs_pct", .. }));

        assert!(StressParams {
            sales_pct: f64::NAN,
            ..Default::default()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_validate_dso_bound() {
        let at_limit = StressParams {
            dso_days: MAX_DSO_DAYS,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        for dso_days in [MAX_DSO_DAYS + 1, u32::MAX] {
            let err = StressParams {
                dso_days,
                ..Default::default()
            }
            .validate()
            .unwrap_err();
            assert!(matches!(err, FlowError::InvalidStress { name: "dso_days", .. }));
        }
    }
}
