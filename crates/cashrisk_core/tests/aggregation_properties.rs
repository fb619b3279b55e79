//! Property-based tests for the Flow Aggregator.

use approx::assert_relative_eq;
use cashrisk_core::flows::{
    aggregate, AggregationOptions, Densification, RawFlowRow, StressParams,
};
use cashrisk_core::Date;
use proptest::prelude::*;

fn row_strategy() -> impl Strategy<Value = RawFlowRow> {
    (0i64..60, 0.0f64..1_000.0, 0.0f64..1_000.0).prop_map(|(offset, inflow, outflow)| {
        let date = Date::from_ymd(2024, 1, 1).unwrap().add_days(offset).unwrap();
        RawFlowRow::payment(date.to_string(), inflow, outflow)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_dates_strictly_increasing(rows in prop::collection::vec(row_strategy(), 0..80)) {
        let flows = aggregate(&rows, &AggregationOptions::default()).unwrap();
        for pair in flows.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_total_net_is_conserved(rows in prop::collection::vec(row_strategy(), 1..80)) {
        let expected: f64 = rows
            .iter()
            .map(|r| {
                let legs = r.cash_legs().unwrap();
                legs.inflow - legs.outflow
            })
            .sum();
        let flows = aggregate(&rows, &AggregationOptions::default()).unwrap();
        let total: f64 = flows.iter().map(|f| f.net).sum();
        assert_relative_eq!(total, expected, epsilon = 1e-6, max_relative = 1e-9);
    }

    #[test]
    fn test_dso_preserves_total_and_count(
        rows in prop::collection::vec(row_strategy(), 1..40),
        dso in 0u32..45,
    ) {
        let base = aggregate(&rows, &AggregationOptions::default()).unwrap();
        let shifted = aggregate(
            &rows,
            &AggregationOptions::with_stress(StressParams { dso_days: dso, ..Default::default() }),
        )
        .unwrap();
        let base_total: f64 = base.iter().map(|f| f.net).sum();
        let shifted_total: f64 = shifted.iter().map(|f| f.net).sum();
        assert_relative_eq!(base_total, shifted_total, epsilon = 1e-6, max_relative = 1e-9);
        if dso > 0 {
            prop_assert!(shifted.last().unwrap().date >= base.last().unwrap().date);
        }
    }

    #[test]
    fn test_dense_is_contiguous_and_sum_preserving(rows in prop::collection::vec(row_strategy(), 1..40)) {
        let sparse = aggregate(&rows, &AggregationOptions::default()).unwrap();
        let dense = aggregate(
            &rows,
            &AggregationOptions { densification: Densification::Dense, ..Default::default() },
        )
        .unwrap();

        let span = dense.last().unwrap().date - dense.first().unwrap().date;
        prop_assert_eq!(dense.len() as i64, span + 1);
        for pair in dense.windows(2) {
            prop_assert_eq!(pair[1].date - pair[0].date, 1);
        }
        let s: f64 = sparse.iter().map(|f| f.net).sum();
        let d: f64 = dense.iter().map(|f| f.net).sum();
        prop_assert_eq!(s, d);
    }
}
