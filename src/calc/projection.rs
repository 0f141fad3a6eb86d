// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Monthly-contribution annuity maths.
//!
//! [`required_monthly`] and [`future_value`] solve the same equation
//! `FV = payment * ((1 + r)^n - 1) / r` for opposite unknowns, with `r` the
//! monthly rate and `n` the number of months. Non-positive inputs never
//! fail: they yield zero, or the straight-line (uncompounded) answer when
//! only the rate is non-positive.

use serde::Serialize;

enum Growth {
    /// Non-positive rate, or one too small to register over the horizon.
    Flat,
    Compound { r: f64, factor: f64 },
    /// `(1 + r)^n` overflowed.
    Unbounded,
}

fn compounding(annual_rate_pct: f64, months: f64) -> Growth {
    if annual_rate_pct <= 0.0 {
        return Growth::Flat;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    let factor = (1.0 + r).powf(months);
    if !factor.is_finite() {
        Growth::Unbounded
    } else if factor > 1.0 {
        Growth::Compound { r, factor }
    } else {
        Growth::Flat
    }
}

/// Level monthly contribution that grows to `goal_amount` after `years`.
pub fn required_monthly(goal_amount: f64, annual_rate_pct: f64, years: f64) -> f64 {
    if goal_amount <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    let months = years * 12.0;
    match compounding(annual_rate_pct, months) {
        Growth::Compound { r, factor } => goal_amount * r / (factor - 1.0),
        Growth::Unbounded => 0.0,
        Growth::Flat => goal_amount / months,
    }
}

/// Value reached by contributing `monthly_amount` every month for `years`.
/// Saturates at `f64::MAX`.
pub fn future_value(monthly_amount: f64, annual_rate_pct: f64, years: f64) -> f64 {
    if monthly_amount <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    let months = years * 12.0;
    match compounding(annual_rate_pct, months) {
        Growth::Compound { r, factor } => (monthly_amount * (factor - 1.0) / r).min(f64::MAX),
        Growth::Unbounded => f64::MAX,
        Growth::Flat => (monthly_amount * months).min(f64::MAX),
    }
}

/// Monthly savings after compounding yearly step-ups of `increase_pct`
/// for `increase_years`. Without a full set of inputs the current amount
/// is returned unchanged.
pub fn stepped_up_savings(monthly_savings: f64, increase_pct: f64, increase_years: f64) -> f64 {
    if monthly_savings > 0.0 && increase_pct > 0.0 && increase_years > 0.0 {
        let stepped = monthly_savings * (1.0 + increase_pct / 100.0).powf(increase_years);
        if stepped.is_finite() {
            return stepped;
        }
    }
    monthly_savings
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    Retirement,
    House,
    Education,
}

impl GoalKind {
    pub fn label(&self) -> &'static str {
        match self {
            GoalKind::Retirement => "Retirement",
            GoalKind::House => "House",
            GoalKind::Education => "Education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProjection {
    pub kind: GoalKind,
    pub target: f64,
    pub years: f64,
    pub annual_rate_pct: f64,
    pub contribution: f64,
    pub required_monthly: f64,
    pub projected_value: f64,
    /// projected_value / target, or 0 without a target.
    pub coverage: f64,
}

impl GoalProjection {
    /// A goal is only worth reporting once it has an amount and a horizon.
    pub fn is_set(&self) -> bool {
        self.target > 0.0 && self.years > 0.0
    }
}

pub fn project_goal(
    kind: GoalKind,
    target: f64,
    years: f64,
    contribution: f64,
    annual_rate_pct: f64,
) -> GoalProjection {
    let projected_value = future_value(contribution, annual_rate_pct, years);
    GoalProjection {
        kind,
        target,
        years,
        annual_rate_pct,
        contribution,
        required_monthly: required_monthly(target, annual_rate_pct, years),
        projected_value,
        coverage: if target > 0.0 {
            projected_value / target
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_close(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-6
    }

    #[test]
    fn required_then_future_value_returns_the_goal() {
        for (amount, rate, years) in [
            (1_000_000.0, 7.0, 30.0),
            (60_000.0, 5.5, 8.0),
            (25_000.0, 0.0, 4.0),
            (12_345.67, 12.0, 0.5),
            (500.0, 0.01, 1.0),
        ] {
            let monthly = required_monthly(amount, rate, years);
            let fv = future_value(monthly, rate, years);
            assert!(rel_close(fv, amount), "{amount} {rate} {years}: {fv}");
        }
    }

    #[test]
    fn zero_or_negative_horizon_or_amount_is_zero() {
        for rate in [-3.0, 0.0, 6.0] {
            assert_eq!(required_monthly(10_000.0, rate, 0.0), 0.0);
            assert_eq!(required_monthly(10_000.0, rate, -2.0), 0.0);
            assert_eq!(required_monthly(0.0, rate, 10.0), 0.0);
            assert_eq!(required_monthly(-5.0, rate, 10.0), 0.0);
            assert_eq!(future_value(100.0, rate, 0.0), 0.0);
            assert_eq!(future_value(0.0, rate, 10.0), 0.0);
            assert_eq!(future_value(-100.0, rate, 10.0), 0.0);
        }
    }

    #[test]
    fn zero_rate_is_straight_line() {
        assert_eq!(required_monthly(24_000.0, 0.0, 2.0), 24_000.0 / 24.0);
        assert_eq!(future_value(250.0, 0.0, 3.0), 250.0 * 3.0 * 12.0);
        assert_eq!(required_monthly(24_000.0, -4.0, 2.0), 1_000.0);
        assert_eq!(future_value(250.0, -4.0, 3.0), 9_000.0);
    }

    #[test]
    fn compounding_beats_straight_line() {
        let with_growth = future_value(500.0, 6.0, 10.0);
        assert!(with_growth > 500.0 * 120.0);
        // 500/month at 6% for 10 years.
        assert!((with_growth - 81_939.67).abs() < 0.01);
        assert!(required_monthly(81_939.67, 6.0, 10.0) < 500.01);
    }

    #[test]
    fn vanishing_rate_does_not_divide_by_zero() {
        let m = required_monthly(1_000.0, 1e-300, 1.0);
        assert!(m.is_finite());
        assert!(rel_close(m, 1_000.0 / 12.0));
    }

    #[test]
    fn huge_growth_stays_monotonic() {
        let mut last_fv = 0.0;
        let mut last_req = f64::INFINITY;
        for years in [1.0, 10.0, 50.0, 100.0, 500.0] {
            let fv = future_value(100.0, 10_000.0, years);
            let req = required_monthly(1e6, 10_000.0, years);
            assert!(fv >= last_fv, "fv dropped at {years} years: {fv}");
            assert!(req <= last_req, "required rose at {years} years: {req}");
            assert!(fv.is_finite() && req.is_finite());
            last_fv = fv;
            last_req = req;
        }
        assert_eq!(future_value(100.0, 10_000.0, 100.0), f64::MAX);
        assert_eq!(required_monthly(1e6, 10_000.0, 100.0), 0.0);

        let p = project_goal(GoalKind::Retirement, 1e6, 100.0, 100.0, 10_000.0);
        assert!(p.coverage >= 1.0);
    }

    #[test]
    fn step_up_needs_all_three_inputs() {
        assert!((stepped_up_savings(500.0, 10.0, 2.0) - 605.0).abs() < 1e-9);
        assert_eq!(stepped_up_savings(500.0, 0.0, 2.0), 500.0);
        assert_eq!(stepped_up_savings(500.0, 10.0, 0.0), 500.0);
        assert_eq!(stepped_up_savings(0.0, 10.0, 2.0), 0.0);
    }

    #[test]
    fn goal_coverage_is_projection_over_target() {
        let p = project_goal(GoalKind::House, 24_000.0, 2.0, 500.0, 0.0);
        assert_eq!(p.projected_value, 12_000.0);
        assert_eq!(p.required_monthly, 1_000.0);
        assert_eq!(p.coverage, 0.5);
        assert!(p.is_set());

        let unset = project_goal(GoalKind::Education, 0.0, 5.0, 300.0, 5.0);
        assert_eq!(unset.coverage, 0.0);
        assert!(!unset.is_set());
    }
}
