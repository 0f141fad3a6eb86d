// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Savings rate and the 50/30/20 check.
//!
//! The pass/fail thresholds (55/35/15) are looser than the displayed
//! 50/30/20 targets so that noisy, self-reported numbers still pass when
//! they are roughly right.

use serde::Serialize;
use std::fmt;

pub const NEEDS_CEILING_PCT: f64 = 55.0;
pub const WANTS_CEILING_PCT: f64 = 35.0;
pub const SAVINGS_FLOOR_PCT: f64 = 15.0;

pub const NEEDS_TARGET_SHARE: f64 = 0.5;
pub const WANTS_TARGET_SHARE: f64 = 0.3;
pub const SAVINGS_TARGET_SHARE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidelineStatus {
    WithinGuidelines,
    OutsideGuidelines,
    NotEnoughData,
}

impl GuidelineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GuidelineStatus::WithinGuidelines => "Roughly within 50/30/20 guidelines",
            GuidelineStatus::OutsideGuidelines => {
                "Outside 50/30/20 guidelines: review spending mix"
            }
            GuidelineStatus::NotEnoughData => "Not enough data yet",
        }
    }
}

impl fmt::Display for GuidelineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guidelines {
    pub savings_rate: f64,
    pub needs_pct: f64,
    pub wants_pct: f64,
    pub savings_pct: f64,
    pub needs_max: f64,
    pub wants_max: f64,
    pub savings_min: f64,
    pub status: GuidelineStatus,
}

/// Fraction (not percent) of take-home pay that is saved.
pub fn savings_rate(monthly_savings: f64, monthly_net: f64) -> f64 {
    if monthly_net > 0.0 {
        monthly_savings / monthly_net
    } else {
        0.0
    }
}

pub fn percent_of_income(amount: f64, monthly_net: f64) -> f64 {
    if monthly_net > 0.0 {
        amount * 100.0 / monthly_net
    } else {
        0.0
    }
}

pub fn classify(
    monthly_net: f64,
    needs_pct: f64,
    wants_pct: f64,
    savings_pct: f64,
) -> GuidelineStatus {
    if monthly_net <= 0.0 {
        return GuidelineStatus::NotEnoughData;
    }
    let needs_ok = needs_pct <= NEEDS_CEILING_PCT;
    let wants_ok = wants_pct <= WANTS_CEILING_PCT;
    let savings_ok = savings_pct >= SAVINGS_FLOOR_PCT;
    if needs_ok && wants_ok && savings_ok {
        GuidelineStatus::WithinGuidelines
    } else {
        GuidelineStatus::OutsideGuidelines
    }
}

pub fn evaluate(
    monthly_net: f64,
    fixed_spending: f64,
    variable_spending: f64,
    monthly_savings: f64,
) -> Guidelines {
    let needs_pct = percent_of_income(fixed_spending, monthly_net);
    let wants_pct = percent_of_income(variable_spending, monthly_net);
    let savings_pct = percent_of_income(monthly_savings, monthly_net);
    let base = monthly_net.max(0.0);
    Guidelines {
        savings_rate: savings_rate(monthly_savings, monthly_net),
        needs_pct,
        wants_pct,
        savings_pct,
        needs_max: base * NEEDS_TARGET_SHARE,
        wants_max: base * WANTS_TARGET_SHARE,
        savings_min: base * SAVINGS_TARGET_SHARE,
        status: classify(monthly_net, needs_pct, wants_pct, savings_pct),
    }
}
