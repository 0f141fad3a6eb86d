// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rule-based advice.
//!
//! Each rule is a pure function of [`Metrics`] that returns zero or more
//! messages. Rules run in the fixed order of [`RULES`] and skip themselves
//! when the inputs they need are missing, so the same metrics always give
//! the same list.

use crate::calc::guidelines::{
    Guidelines, NEEDS_CEILING_PCT, SAVINGS_FLOOR_PCT, WANTS_CEILING_PCT,
};
use crate::calc::projection::{GoalKind, GoalProjection};
use crate::calc::totals::Totals;
use crate::models::{FinancialInputs, RiskTolerance};
use crate::utils::{fmt_money, fmt_money_whole};
use tracing::debug;

pub const NO_DATA_MESSAGE: &str = "Fill in your income, savings, debts, assets, and goals to see tailored budgeting suggestions here. This is not financial advice, just simple guidance based on your numbers.";

/// Everything the rules look at, derived once per evaluation.
#[derive(Debug, Clone)]
pub struct Metrics {
    pub inputs: FinancialInputs,
    pub totals: Totals,
    pub guidelines: Guidelines,
    pub goals: [GoalProjection; 3],
    pub risk_tolerance: Option<RiskTolerance>,
    pub has_travel_goals: bool,
    pub currency_symbol: String,
}

impl Metrics {
    fn money(&self, v: f64) -> String {
        fmt_money(&self.currency_symbol, v)
    }

    fn money_whole(&self, v: f64) -> String {
        fmt_money_whole(&self.currency_symbol, v)
    }

    /// True when nothing numeric or qualitative has been entered.
    pub fn is_blank(&self) -> bool {
        let i = &self.inputs;
        let aggregates = [
            i.monthly_net,
            i.monthly_gross,
            i.current_monthly_savings,
            i.monthly_invest_for_goals,
            i.number_of_credit_cards,
            i.retirement_target_amount,
            i.house_goal_amount,
            i.education_goal_amount,
            self.totals.total_debts,
            self.totals.total_assets,
            self.totals.total_expenses,
        ];
        aggregates.iter().all(|v| *v == 0.0)
            && self.risk_tolerance.is_none()
            && !self.has_travel_goals
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyTier {
    UnderOneMonth,
    OneToThreeMonths,
    ThreeMonthsOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsTier {
    BelowTenPercent,
    TenToTwentyPercent,
    TwentyPercentOrMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebtTier {
    NoAssets,
    High,
    Elevated,
    Healthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageTier {
    Behind,
    Close,
    OnTrack,
}

/// Months of take-home pay the liquid assets would cover.
pub fn emergency_tier(m: &Metrics) -> Option<EmergencyTier> {
    let net = m.inputs.monthly_net;
    if net <= 0.0 {
        return None;
    }
    let months = m.totals.emergency_fund / net;
    Some(if months < 1.0 {
        EmergencyTier::UnderOneMonth
    } else if months < 3.0 {
        EmergencyTier::OneToThreeMonths
    } else {
        EmergencyTier::ThreeMonthsOrMore
    })
}

pub fn savings_tier(m: &Metrics) -> Option<SavingsTier> {
    if m.inputs.monthly_net <= 0.0 {
        return None;
    }
    let rate = m.guidelines.savings_rate;
    Some(if rate < 0.1 {
        SavingsTier::BelowTenPercent
    } else if rate < 0.2 {
        SavingsTier::TenToTwentyPercent
    } else {
        SavingsTier::TwentyPercentOrMore
    })
}

pub fn debt_tier(m: &Metrics) -> Option<DebtTier> {
    let debts = m.totals.total_debts;
    if debts <= 0.0 {
        return None;
    }
    let assets = m.totals.total_assets;
    if assets <= 0.0 {
        return Some(DebtTier::NoAssets);
    }
    let ratio = debts / assets;
    Some(if ratio > 1.2 {
        DebtTier::High
    } else if ratio > 0.5 {
        DebtTier::Elevated
    } else {
        DebtTier::Healthy
    })
}

pub fn coverage_tier(coverage: f64) -> CoverageTier {
    if coverage < 0.6 {
        CoverageTier::Behind
    } else if coverage < 1.0 {
        CoverageTier::Close
    } else {
        CoverageTier::OnTrack
    }
}

fn emergency_fund(m: &Metrics) -> Vec<String> {
    let Some(tier) = emergency_tier(m) else {
        return Vec::new();
    };
    let fund = m.totals.emergency_fund;
    let target = m.money(m.totals.recommended_emergency_fund);
    let months = fund / m.inputs.monthly_net;
    let msg = match tier {
        EmergencyTier::UnderOneMonth if fund <= 0.0 => format!(
            "You don't appear to have a liquid emergency fund yet. Build toward at least 3 months of in-hand income (~{}) in cash, savings or checking as a first priority.",
            target
        ),
        EmergencyTier::UnderOneMonth => format!(
            "Your liquid emergency fund ({}) covers less than one month of in-hand income. Make growing it toward 3 months (~{}) your first priority before new long-term investments.",
            m.money(fund),
            target
        ),
        EmergencyTier::OneToThreeMonths => format!(
            "Your liquid emergency fund ({}) covers about {:.1} months of in-hand income. A common rule of thumb is at least 3 months (~{}), so keep topping it up before taking on new long-term investments.",
            m.money(fund),
            months,
            target
        ),
        EmergencyTier::ThreeMonthsOrMore => format!(
            "Your emergency fund (~{}) covers {:.1} months of in-hand income, which looks solid. You can direct more of new savings toward investments or debt payoff.",
            m.money(fund),
            months
        ),
    };
    vec![msg]
}

fn savings_rate(m: &Metrics) -> Vec<String> {
    let Some(tier) = savings_tier(m) else {
        return Vec::new();
    };
    let pct = m.guidelines.savings_rate * 100.0;
    let msg = match tier {
        SavingsTier::BelowTenPercent if m.inputs.current_monthly_savings <= 0.0 => {
            "You are not saving anything from your in-hand income yet. Try starting with even 5% as an automatic transfer into savings or investments.".to_string()
        }
        SavingsTier::BelowTenPercent => format!(
            "Your savings rate is about {:.1}%. Aim for at least 10-20% of your in-hand income going into savings or investments.",
            pct
        ),
        SavingsTier::TenToTwentyPercent => format!(
            "Nice! Your savings rate is around {:.1}%. See if you can gradually push this closer to 20% over time.",
            pct
        ),
        SavingsTier::TwentyPercentOrMore => format!(
            "Great job, your savings rate is roughly {:.1}%. Keep this habit and review your investments yearly.",
            pct
        ),
    };
    vec![msg]
}

fn spending_mix(m: &Metrics) -> Vec<String> {
    let g = &m.guidelines;
    let spent = m.totals.fixed_spending + m.totals.variable_spending;
    if m.inputs.monthly_net <= 0.0 || (spent <= 0.0 && m.inputs.current_monthly_savings <= 0.0) {
        return Vec::new();
    }
    let mut out = Vec::new();
    if g.needs_pct > NEEDS_CEILING_PCT {
        out.push(format!(
            "Your fixed costs are about {:.1}% of in-hand income this month, above the ~50% guideline for needs (~{}). Review rent, utilities, subscriptions, and insurance to see if anything can be renegotiated.",
            g.needs_pct,
            m.money(g.needs_max)
        ));
    }
    if g.wants_pct > WANTS_CEILING_PCT {
        out.push(format!(
            "Your variable spending is about {:.1}% of in-hand income this month, above the ~30% guideline for wants (~{}). Consider weekly limits for dining out, entertainment, and impulse buys.",
            g.wants_pct,
            m.money(g.wants_max)
        ));
    }
    if g.savings_pct < SAVINGS_FLOOR_PCT {
        out.push(format!(
            "You're saving about {:.1}% of in-hand income, below the commonly suggested 20% (~{}). As your income grows, direct part of each raise straight into savings or investments.",
            g.savings_pct,
            m.money(g.savings_min)
        ));
    }
    if out.is_empty() {
        out.push(format!(
            "Your spending mix this month (needs {:.1}%, wants {:.1}%, saving {:.1}%) is roughly in line with the 50/30/20 guideline.",
            g.needs_pct, g.wants_pct, g.savings_pct
        ));
    }
    out
}

fn debt_to_assets(m: &Metrics) -> Vec<String> {
    let Some(tier) = debt_tier(m) else {
        return Vec::new();
    };
    let t = &m.totals;
    let ratio = t.total_debts / t.total_assets;
    let mut out = vec![match tier {
        DebtTier::NoAssets => format!(
            "You have {} of debt and no recorded assets, so your debt-to-asset ratio is effectively unlimited. Focus on high-interest balances first and start a small cash buffer alongside.",
            m.money(t.total_debts)
        ),
        DebtTier::High => format!(
            "Your debts are about {:.2}x your assets. Focus on reducing high-interest debts first (especially credit cards and personal loans) before taking on new big expenses.",
            ratio
        ),
        DebtTier::Elevated => format!(
            "Your debt-to-asset ratio is about {:.2}. That's manageable, but keep prepaying high-interest loans when you have extra cash.",
            ratio
        ),
        DebtTier::Healthy => format!(
            "Your assets comfortably exceed your debts (debt-to-asset ratio {:.2}), which is a good sign. Keep tracking your loans and prepay high-interest ones when you can.",
            ratio
        ),
    }];
    if t.net_worth < 0.0 {
        out.push(format!(
            "Your net worth is currently negative ({}). Paying down debt will do more for you right now than new large purchases.",
            m.money(t.net_worth)
        ));
    }
    out
}

fn goal_message(m: &Metrics, g: &GoalProjection) -> String {
    let target = m.money_whole(g.target);
    let required = m.money(g.required_monthly);
    let contribution = m.money(g.contribution);
    let projected = m.money_whole(g.projected_value);
    let pct = g.coverage * 100.0;
    let (years, rate) = (g.years, g.annual_rate_pct);
    match (g.kind, coverage_tier(g.coverage)) {
        (GoalKind::Retirement, CoverageTier::Behind) => format!(
            "To reach your retirement goal of {target} in {years} years with an assumed return of {rate}% per year, you'd need to invest about {required} per month. Saving {contribution} per month projects to about {projected} ({pct:.0}% of the goal), so look for ways to narrow this gap over time."
        ),
        (GoalKind::Retirement, CoverageTier::Close) => format!(
            "Your current savings of {contribution} per month project to about {projected} by retirement, {pct:.0}% of your {target} goal. Raising it toward {required} per month would close the gap."
        ),
        (GoalKind::Retirement, CoverageTier::OnTrack) => format!(
            "Based on your assumption of {rate}% per year, your current monthly investing (~{contribution}) is in the range needed to hit your retirement goal of {target} in {years} years (projected ~{projected}; not guaranteed, markets are unpredictable)."
        ),
        (GoalKind::House, CoverageTier::Behind) => format!(
            "For your house goal of {target} in {years} years at ~{rate}% assumed return, you'd need around {required} per month. Investing {contribution} per month projects to about {projected}, so try to bridge that gap where possible."
        ),
        (GoalKind::House, CoverageTier::Close) => format!(
            "Your planned investing ({contribution} per month) gets you most of the way to your house goal: about {projected} of {target} in {years} years. Around {required} per month would fully fund it."
        ),
        (GoalKind::House, CoverageTier::OnTrack) => format!(
            "Your planned monthly investing (~{contribution}) looks in line with your house goal of {target} in {years} years (projected ~{projected} under a simple {rate}% assumption)."
        ),
        (GoalKind::Education, CoverageTier::Behind) => format!(
            "For your education goal of {target} in {years} years, a simple projection suggests you'd need around {required} per month; your current plan reaches about {projected}."
        ),
        (GoalKind::Education, CoverageTier::Close) => format!(
            "Your current plan covers roughly {pct:.0}% of your education goal of {target} in {years} years. Nudging contributions toward {required} per month would close the gap."
        ),
        (GoalKind::Education, CoverageTier::OnTrack) => format!(
            "Your current planned investing could be enough to cover your education goal of {target} in {years} years (projected ~{projected}), under your assumed return rate."
        ),
    }
}

fn goals(m: &Metrics) -> Vec<String> {
    m.goals
        .iter()
        .filter(|g| g.is_set())
        .map(|g| goal_message(m, g))
        .collect()
}

fn credit_cards(m: &Metrics) -> Vec<String> {
    let cards = m.inputs.number_of_credit_cards;
    if cards <= 0.0 {
        return Vec::new();
    }
    vec![format!(
        "You reported about {} credit card(s). With credit cards, it's usually best to avoid carrying balances month-to-month and aim to pay them in full.",
        cards
    )]
}

fn debt_strategy(m: &Metrics) -> Vec<String> {
    let i = &m.inputs;
    if m.totals.total_debts <= 0.0 || (i.highest_card_apr <= 0.0 && i.avg_debt_apr <= 0.0) {
        return Vec::new();
    }
    let focus_rate = if i.highest_card_apr > 0.0 {
        i.highest_card_apr
    } else {
        i.avg_debt_apr
    };
    vec![
        format!(
            "Consider a \"debt avalanche\" strategy: pay at least the minimum on all debts and direct every extra dollar toward the debt with the highest interest rate (around {}% for you). This minimizes total interest paid.",
            focus_rate
        ),
        "If you need more motivation, a \"debt snowball\" approach (tackling the smallest balances first) can help you see quick wins, even if it's not mathematically perfect.".to_string(),
    ]
}

fn risk_tolerance(m: &Metrics) -> Vec<String> {
    let Some(risk) = m.risk_tolerance else {
        return Vec::new();
    };
    let profile = match risk {
        RiskTolerance::Conservative => "You marked your risk tolerance as conservative. That typically aligns with a mix of cash, high-quality bonds, and large-cap or index equity funds. Focus on diversification, low fees, and capital preservation rather than chasing high returns.",
        RiskTolerance::Moderate => "With a moderate risk tolerance, a balanced portfolio (for example, a blend of broad equity index funds and bond funds) can make sense. Avoid concentrating too much in a single stock or sector.",
        RiskTolerance::Aggressive => "An aggressive profile usually means higher exposure to equities and growth-oriented funds. It's still important to diversify across regions and sectors and make sure you can handle big swings in value.",
    };
    vec![
        profile.to_string(),
        "For specific stocks, ETFs, or mutual funds, look for low-cost, diversified index products that fit your risk level and investment horizon, and consider speaking with a qualified financial advisor before making decisions.".to_string(),
    ]
}

fn sinking_fund(m: &Metrics) -> Vec<String> {
    if !m.has_travel_goals {
        return Vec::new();
    }
    vec!["Since you have vacation or holiday goals, create a separate \"travel\" or \"festivals\" sinking fund and put a fixed amount into it every month so big trips don't disrupt your regular budget.".to_string()]
}

type Rule = fn(&Metrics) -> Vec<String>;

/// Evaluation order, highest priority first.
pub const RULES: &[(&str, Rule)] = &[
    ("emergency_fund", emergency_fund),
    ("savings_rate", savings_rate),
    ("spending_mix", spending_mix),
    ("debt_to_assets", debt_to_assets),
    ("goals", goals),
    ("credit_cards", credit_cards),
    ("debt_strategy", debt_strategy),
    ("risk_tolerance", risk_tolerance),
    ("sinking_fund", sinking_fund),
];

/// Runs every rule in order. Never returns an empty list.
pub fn generate(m: &Metrics) -> Vec<String> {
    if m.is_blank() {
        debug!("no inputs yet; returning fallback recommendation");
        return vec![NO_DATA_MESSAGE.to_string()];
    }
    let mut recs = Vec::new();
    for (name, rule) in RULES {
        let produced = rule(m);
        debug!(rule = *name, count = produced.len(), "recommendation rule evaluated");
        recs.extend(produced);
    }
    if recs.is_empty() {
        recs.push(NO_DATA_MESSAGE.to_string());
    }
    recs
}
