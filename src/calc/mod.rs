// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The budget calculator: a pure recomputation from a [`Profile`] to every
//! displayed figure.

pub mod guidelines;
pub mod projection;
pub mod recommend;
pub mod totals;

use crate::models::Profile;
use chrono::NaiveDate;
use guidelines::Guidelines;
use projection::{GoalKind, GoalProjection, project_goal, stepped_up_savings};
use recommend::Metrics;
use serde::Serialize;
use totals::{CategorySpend, Totals};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CalcOptions {
    pub currency_symbol: String,
}

impl Default for CalcOptions {
    fn default() -> Self {
        CalcOptions {
            currency_symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Projections {
    pub retirement: GoalProjection,
    pub house: GoalProjection,
    pub education: GoalProjection,
    pub projected_monthly_savings: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub as_of: NaiveDate,
    pub totals: Totals,
    pub net_worth: f64,
    pub savings_rate: f64,
    pub guidelines: Guidelines,
    pub projections: Projections,
    pub spending_by_category: Vec<CategorySpend>,
    pub recommendations: Vec<String>,
}

pub fn evaluate(profile: &Profile, as_of: NaiveDate) -> Summary {
    evaluate_with(profile, as_of, &CalcOptions::default())
}

/// Recomputes everything from scratch; `as_of` selects the "current" month.
pub fn evaluate_with(profile: &Profile, as_of: NaiveDate, opts: &CalcOptions) -> Summary {
    let i = profile.inputs();
    let totals = totals::compute(&i, &profile.expenses, as_of);
    let guidelines = guidelines::evaluate(
        i.monthly_net,
        totals.fixed_spending,
        totals.variable_spending,
        i.current_monthly_savings,
    );
    let rate = i.expected_annual_return;
    let projections = Projections {
        retirement: project_goal(
            GoalKind::Retirement,
            i.retirement_target_amount,
            i.retirement_years_from_now,
            i.current_monthly_savings,
            rate,
        ),
        house: project_goal(
            GoalKind::House,
            i.house_goal_amount,
            i.house_goal_years,
            i.monthly_invest_for_goals,
            rate,
        ),
        education: project_goal(
            GoalKind::Education,
            i.education_goal_amount,
            i.education_goal_years,
            i.monthly_invest_for_goals,
            rate,
        ),
        projected_monthly_savings: stepped_up_savings(
            i.current_monthly_savings,
            i.savings_increase_percent,
            i.savings_increase_years,
        ),
    };

    let metrics = Metrics {
        inputs: i,
        totals,
        guidelines,
        goals: [
            projections.retirement,
            projections.house,
            projections.education,
        ],
        risk_tolerance: profile.investing.risk_tolerance,
        has_travel_goals: !profile.goals.vacation.trim().is_empty()
            || !profile.goals.holidays.trim().is_empty(),
        currency_symbol: opts.currency_symbol.clone(),
    };
    let recommendations = recommend::generate(&metrics);
    debug!(
        %as_of,
        expenses = profile.expenses.len(),
        recommendations = recommendations.len(),
        status = %guidelines.status,
        "budget evaluated"
    );

    Summary {
        as_of,
        totals,
        net_worth: totals.net_worth,
        savings_rate: guidelines.savings_rate,
        guidelines,
        projections,
        spending_by_category: totals::spending_by_category(&profile.expenses, as_of),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn blank_profile_evaluates_to_fallback() {
        let s = evaluate(&Profile::default(), day("2025-06-15"));
        assert_eq!(s.net_worth, 0.0);
        assert_eq!(s.savings_rate, 0.0);
        assert_eq!(s.guidelines.status, guidelines::GuidelineStatus::NotEnoughData);
        assert_eq!(s.recommendations, vec![recommend::NO_DATA_MESSAGE.to_string()]);
    }

    #[test]
    fn evaluate_uses_current_month_only_for_split() {
        let mut p = Profile::default();
        p.set("income.monthlyNet", "5000").unwrap();
        p.set("income.currentMonthlySavings", "1000").unwrap();
        let mut id = 1;
        for (cat, amt, date) in [
            ("Rent", "1500", "2025-06-01"),
            ("Electricity Bill", "500", "2025-06-03"),
            ("Groceries", "600", "2025-06-10"),
            ("Entertainment", "400", "2025-06-20"),
            ("Travel", "3000", "2025-05-20"),
        ] {
            let e = NewExpense::validate(cat, amt, date, "").unwrap().with_id(id);
            p.expenses.push(e);
            id += 1;
        }
        let s = evaluate(&p, day("2025-06-30"));
        assert_eq!(s.totals.fixed_spending, 2000.0);
        assert_eq!(s.totals.variable_spending, 1000.0);
        assert_eq!(s.totals.total_expenses, 6000.0);
        assert_eq!(s.guidelines.status, guidelines::GuidelineStatus::WithinGuidelines);
        assert_eq!(s.spending_by_category[0].category, "Rent");
    }

    #[test]
    fn projections_use_the_right_contributions() {
        let mut p = Profile::default();
        p.set("income.currentMonthlySavings", "500").unwrap();
        p.set("goals.retirementTargetAmount", "60000").unwrap();
        p.set("goals.retirementYearsFromNow", "10").unwrap();
        p.set("investing.monthlyInvestForGoals", "200").unwrap();
        p.set("investing.houseGoalAmount", "24000").unwrap();
        p.set("investing.houseGoalYears", "5").unwrap();
        let s = evaluate(&p, day("2025-01-01"));
        assert_eq!(s.projections.retirement.projected_value, 60_000.0);
        assert_eq!(s.projections.retirement.coverage, 1.0);
        assert_eq!(s.projections.house.projected_value, 12_000.0);
        assert_eq!(s.projections.house.required_monthly, 400.0);
        assert_eq!(s.projections.education.projected_value, 0.0);
        assert_eq!(s.projections.projected_monthly_savings, 500.0);
    }

    #[test]
    fn currency_symbol_flows_into_messages() {
        let mut p = Profile::default();
        p.set("income.monthlyNet", "1000").unwrap();
        let opts = CalcOptions {
            currency_symbol: "€".into(),
        };
        let s = evaluate_with(&p, day("2025-01-01"), &opts);
        assert!(s.recommendations[0].contains("€3,000.00"));
    }
}
