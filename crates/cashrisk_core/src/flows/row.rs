//! Raw transaction-like rows supplied by import and dataset readers.

/// One sales line: quantities and unit economics of a sold item.
///
/// Every field defaults to zero so partially populated imports still
/// produce a usable row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaleLine {
    /// Units sold.
    pub qty: f64,
    /// Price charged per unit.
    pub unit_price: f64,
    /// Cost per unit.
    pub unit_cost: f64,
    /// Absolute discount on the line.
    pub discount: f64,
    /// Shipping charged to the customer.
    pub shipping_fee: f64,
    /// Shipping paid to the carrier.
    pub shipping_cost: f64,
}

impl SaleLine {
    /// Cash received for the line: `max(0, qty*unit_price - discount) + shipping_fee`.
    #[inline]
    pub fn inflow(&self) -> f64 {
        (self.qty * self.unit_price - self.discount).max(0.0) + self.shipping_fee
    }

    /// Cash paid for the line: `max(0, qty*unit_cost) + shipping_cost`.
    #[inline]
    pub fn outflow(&self) -> f64 {
        (self.qty * self.unit_cost).max(0.0) + self.shipping_cost
    }
}

/// How a row's cash legs are derived.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlowKind {
    /// A sales line; legs are computed from unit economics.
    Sale(SaleLine),
    /// A banking or payment-provider row with explicit legs.
    Payment {
        /// Money in.
        inflow: f64,
        /// Money out.
        outflow: f64,
    },
}

/// Inflow and outflow of a single row, both finite.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CashLegs {
    /// Money in.
    pub inflow: f64,
    /// Money out.
    pub outflow: f64,
}

/// A transaction-like record consumed once by the aggregator.
///
/// The date is kept as the raw string supplied by the reader; rows whose
/// date is missing or unparseable are dropped during aggregation.
///
/// # Examples
///
/// ```
/// use cashrisk_core::flows::{RawFlowRow, SaleLine};
///
/// let row = RawFlowRow::sale(
///     "2024-05-01",
///     SaleLine { qty: 2.0, unit_price: 30.0, unit_cost: 10.0, ..Default::default() },
/// );
/// let legs = row.cash_legs().unwrap();
/// assert_eq!(legs.inflow, 60.0);
/// assert_eq!(legs.outflow, 20.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawFlowRow {
    /// Raw date or timestamp string, if any.
    pub date: Option<String>,
    /// Cash leg derivation.
    pub kind: FlowKind,
}

impl RawFlowRow {
    /// Creates a sales row.
    pub fn sale(date: impl Into<String>, line: SaleLine) -> Self {
        Self {
            date: Some(date.into()),
            kind: FlowKind::Sale(line),
        }
    }

    /// Creates a payment row with explicit legs.
    pub fn payment(date: impl Into<String>, inflow: f64, outflow: f64) -> Self {
        Self {
            date: Some(date.into()),
            kind: FlowKind::Payment { inflow, outflow },
        }
    }

    /// Creates a payment row from a single signed amount (positive = in).
    pub fn signed(date: impl Into<String>, amount: f64) -> Self {
        Self::payment(date, amount.max(0.0), (-amount).max(0.0))
    }

    /// Computes the row's cash legs.
    ///
    /// Returns `None` when either leg is not finite.
    pub fn cash_legs(&self) -> Option<CashLegs> {
        let (inflow, outflow) = match self.kind {
            FlowKind::Sale(line) => (line.inflow(), line.outflow()),
            FlowKind::Payment { inflow, outflow } => (inflow, outflow),
        };
        (inflow.is_finite() && outflow.is_finite()).then_some(CashLegs { inflow, outflow })
    }
}
