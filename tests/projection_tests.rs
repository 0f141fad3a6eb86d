// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use nestegg::calc::projection::{future_value, required_monthly};

#[test]
fn required_and_future_are_inverses() {
    for (amount, rate, years) in [
        (100_000.0, 6.0, 10.0),
        (1_000_000.0, 8.0, 30.0),
        (25_000.0, 0.0, 4.0),
        (5_000.0, 3.5, 0.5),
    ] {
        let monthly = required_monthly(amount, rate, years);
        let back = future_value(monthly, rate, years);
        assert!(
            ((back - amount) / amount).abs() < 1e-6,
            "{} {} {} -> {}",
            amount,
            rate,
            years,
            back
        );
    }
}

#[test]
fn non_positive_inputs_give_zero() {
    for rate in [-5.0, 0.0, 7.0] {
        assert_eq!(required_monthly(10_000.0, rate, 0.0), 0.0);
        assert_eq!(required_monthly(10_000.0, rate, -1.0), 0.0);
        assert_eq!(required_monthly(0.0, rate, 10.0), 0.0);
        assert_eq!(future_value(500.0, rate, 0.0), 0.0);
        assert_eq!(future_value(-500.0, rate, 10.0), 0.0);
    }
}

#[test]
fn zero_rate_is_simple_division() {
    assert_eq!(required_monthly(12_000.0, 0.0, 2.0), 12_000.0 / 24.0);
    assert_eq!(future_value(250.0, 0.0, 3.0), 250.0 * 36.0);
    // negative rates fall back to the same simple rule
    assert_eq!(future_value(250.0, -2.0, 3.0), 250.0 * 36.0);
}
