// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parses a form field the lenient way: empty, non-numeric or non-finite
/// input counts as zero.
pub fn parse_number_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

pub fn parse_expense_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    FoodAndBeverage,
    Groceries,
    Rent,
    Transport,
    Entertainment,
    ElectricityBill,
    WaterBill,
    Internet,
    Streaming,
    CellPhoneBill,
    CarMaintenance,
    CarPayments,
    Fuel,
    HomeLoanEmi,
    Insurance,
    Medical,
    Education,
    GiftsAndDonations,
    Travel,
    Miscellaneous,
    /// A stored label that is no longer in the catalog.
    Other(String),
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 20] = [
        ExpenseCategory::FoodAndBeverage,
        ExpenseCategory::Groceries,
        ExpenseCategory::Rent,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::ElectricityBill,
        ExpenseCategory::WaterBill,
        ExpenseCategory::Internet,
        ExpenseCategory::Streaming,
        ExpenseCategory::CellPhoneBill,
        ExpenseCategory::CarMaintenance,
        ExpenseCategory::CarPayments,
        ExpenseCategory::Fuel,
        ExpenseCategory::HomeLoanEmi,
        ExpenseCategory::Insurance,
        ExpenseCategory::Medical,
        ExpenseCategory::Education,
        ExpenseCategory::GiftsAndDonations,
        ExpenseCategory::Travel,
        ExpenseCategory::Miscellaneous,
    ];

    pub fn label(&self) -> &str {
        match self {
            ExpenseCategory::FoodAndBeverage => "Food & Beverage",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::ElectricityBill => "Electricity Bill",
            ExpenseCategory::WaterBill => "Water Bill",
            ExpenseCategory::Internet => "Internet",
            ExpenseCategory::Streaming => "Cable / Streaming Services",
            ExpenseCategory::CellPhoneBill => "Cell Phone Bill",
            ExpenseCategory::CarMaintenance => "Car Maintenance",
            ExpenseCategory::CarPayments => "Car Payments",
            ExpenseCategory::Fuel => "Gasoline / Fuel",
            ExpenseCategory::HomeLoanEmi => "Home Loan EMI",
            ExpenseCategory::Insurance => "Insurance (Health / Auto / Home)",
            ExpenseCategory::Medical => "Medical & Healthcare",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::GiftsAndDonations => "Gifts & Donations",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Miscellaneous => "Miscellaneous",
            ExpenseCategory::Other(label) => label,
        }
    }

    /// Short CLI-friendly name, e.g. `home-loan-emi`.
    pub fn slug(&self) -> String {
        let mut out = String::new();
        for ch in self.label().chars() {
            if ch.is_ascii_alphanumeric() {
                out.push(ch.to_ascii_lowercase());
            } else if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
        }
        out.trim_end_matches('-').to_string()
    }

    /// Fixed obligations counted as "needs" in the 50/30/20 split.
    pub fn is_need(&self) -> bool {
        matches!(
            self,
            ExpenseCategory::Rent
                | ExpenseCategory::ElectricityBill
                | ExpenseCategory::WaterBill
                | ExpenseCategory::Internet
                | ExpenseCategory::Streaming
                | ExpenseCategory::CellPhoneBill
                | ExpenseCategory::CarPayments
                | ExpenseCategory::HomeLoanEmi
                | ExpenseCategory::Insurance
        )
    }
}

impl FromStr for ExpenseCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ExpenseCategory::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted) || c.slug() == wanted.to_lowercase())
            .cloned()
            .ok_or_else(|| ValidationError::UnknownCategory(wanted.to_string()))
    }
}

impl From<String> for ExpenseCategory {
    fn from(label: String) -> Self {
        label
            .parse()
            .unwrap_or_else(|_| ExpenseCategory::Other(label.trim().to_string()))
    }
}

impl From<ExpenseCategory> for String {
    fn from(c: ExpenseCategory) -> Self {
        c.label().to_string()
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64, // epoch millis at creation
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub date: String, // YYYY-MM-DD, may be empty in legacy rows
    pub notes: String,
}

impl Expense {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_expense_date(&self.date)
    }

    pub fn amount_value(&self) -> f64 {
        self.amount.to_f64().filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}

/// A validated expense submission that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub notes: String,
}

impl NewExpense {
    pub fn validate(
        category: &str,
        amount: &str,
        date: &str,
        notes: &str,
    ) -> Result<Self, ValidationError> {
        let category: ExpenseCategory = category.parse()?;
        let amount = amount
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|a| *a > Decimal::ZERO)
            .ok_or_else(|| ValidationError::InvalidAmount(amount.trim().to_string()))?;
        if date.trim().is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date = parse_expense_date(date)
            .ok_or_else(|| ValidationError::InvalidDate(date.trim().to_string()))?;
        Ok(NewExpense {
            category,
            amount,
            date,
            notes: notes.trim().to_string(),
        })
    }

    pub fn with_id(self, id: i64) -> Expense {
        Expense {
            id,
            category: self.category,
            amount: self.amount,
            date: self.date.to_string(),
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "Conservative",
            RiskTolerance::Moderate => "Moderate",
            RiskTolerance::Aggressive => "Aggressive",
        }
    }

    /// Empty input means "unset".
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, ValidationError> {
        match raw.trim().to_lowercase().as_str() {
            "" => Ok(None),
            "conservative" => Ok(Some(RiskTolerance::Conservative)),
            "moderate" => Ok(Some(RiskTolerance::Moderate)),
            "aggressive" => Ok(Some(RiskTolerance::Aggressive)),
            _ => Err(ValidationError::InvalidRiskTolerance(raw.trim().to_string())),
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A form section whose fields are addressed by their camelCase names.
trait Section {
    const NAME: &'static str;
    const FIELDS: &'static [&'static str];

    fn slot(&self, field: &str) -> Option<&String>;
    fn slot_mut(&mut self, field: &str) -> Option<&mut String>;

    fn resolve(field: &str) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .copied()
            .find(|f| f.eq_ignore_ascii_case(field))
    }
}

/// Implements [`Section`] from one `"camelKey" => field` list. A key with
/// no field is listed in `FIELDS` but has no string slot.
macro_rules! section {
    ($ty:ty, $name:literal, [$($key:literal $(=> $field:ident)?),* $(,)?]) => {
        impl Section for $ty {
            const NAME: &'static str = $name;
            const FIELDS: &'static [&'static str] = &[$($key),*];

            fn slot(&self, field: &str) -> Option<&String> {
                match field {
                    $($($key => Some(&self.$field),)?)*
                    _ => None,
                }
            }

            fn slot_mut(&mut self, field: &str) -> Option<&mut String> {
                match field {
                    $($($key => Some(&mut self.$field),)?)*
                    _ => None,
                }
            }
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Debts {
    pub mortgage: String,
    pub car_loan: String,
    pub credit_cards: String,
    pub personal_loan: String,
    pub student_loan: String,
    pub other_debt: String,
    pub number_of_credit_cards: String,
    #[serde(rename = "highestCardAPR")]
    pub highest_card_apr: String,
    #[serde(rename = "avgDebtAPR")]
    pub avg_debt_apr: String,
}

section!(Debts, "debts", [
    "mortgage" => mortgage,
    "carLoan" => car_loan,
    "creditCards" => credit_cards,
    "personalLoan" => personal_loan,
    "studentLoan" => student_loan,
    "otherDebt" => other_debt,
    "numberOfCreditCards" => number_of_credit_cards,
    "highestCardAPR" => highest_card_apr,
    "avgDebtAPR" => avg_debt_apr,
]);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Assets {
    pub cash: String,
    pub savings_account: String,
    pub checking_account: String,
    pub hsa: String,
    pub investments: String,
    pub retirement: String,
    pub property: String,
    pub other_assets: String,
}

section!(Assets, "assets", [
    "cash" => cash,
    "savingsAccount" => savings_account,
    "checkingAccount" => checking_account,
    "hsa" => hsa,
    "investments" => investments,
    "retirement" => retirement,
    "property" => property,
    "otherAssets" => other_assets,
]);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Goals {
    pub short_term: String,
    pub long_term: String,
    pub vacation: String,
    pub holidays: String,
    pub retirement_target_amount: String,
    pub retirement_years_from_now: String,
}

section!(Goals, "goals", [
    "shortTerm" => short_term,
    "longTerm" => long_term,
    "vacation" => vacation,
    "holidays" => holidays,
    "retirementTargetAmount" => retirement_target_amount,
    "retirementYearsFromNow" => retirement_years_from_now,
]);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Income {
    pub monthly_gross: String,
    pub monthly_net: String,
    pub current_monthly_savings: String,
    pub savings_increase_percent: String,
    pub savings_increase_years: String,
}

section!(Income, "income", [
    "monthlyGross" => monthly_gross,
    "monthlyNet" => monthly_net,
    "currentMonthlySavings" => current_monthly_savings,
    "savingsIncreasePercent" => savings_increase_percent,
    "savingsIncreaseYears" => savings_increase_years,
]);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Investing {
    pub current_holdings: String,
    pub risk_tolerance: Option<RiskTolerance>,
    pub expected_annual_return: String,
    pub monthly_invest_for_goals: String,
    pub house_goal_amount: String,
    pub house_goal_years: String,
    pub education_goal_amount: String,
    pub education_goal_years: String,
}

// riskTolerance is typed and handled by `Profile` directly.
section!(Investing, "investing", [
    "currentHoldings" => current_holdings,
    "riskTolerance",
    "expectedAnnualReturn" => expected_annual_return,
    "monthlyInvestForGoals" => monthly_invest_for_goals,
    "houseGoalAmount" => house_goal_amount,
    "houseGoalYears" => house_goal_years,
    "educationGoalAmount" => education_goal_amount,
    "educationGoalYears" => education_goal_years,
]);

/// Everything a user has entered: the calculator's whole input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub expenses: Vec<Expense>,
    pub debts: Debts,
    pub assets: Assets,
    pub goals: Goals,
    pub income: Income,
    pub investing: Investing,
}

const RISK_TOLERANCE_KEY: &str = "investing.riskTolerance";

fn qualify<S: Section>() -> impl Iterator<Item = String> {
    S::FIELDS.iter().map(|f| format!("{}.{}", S::NAME, f))
}

fn resolve_in<S: Section>(field: &str) -> Option<String> {
    S::resolve(field).map(|f| format!("{}.{}", S::NAME, f))
}

impl Profile {
    /// Every addressable `section.field` key, in form order.
    pub fn keys() -> Vec<String> {
        qualify::<Debts>()
            .chain(qualify::<Assets>())
            .chain(qualify::<Goals>())
            .chain(qualify::<Income>())
            .chain(qualify::<Investing>())
            .collect()
    }

    /// Maps a user-typed key (case-insensitive) onto its canonical spelling.
    pub fn canonical_key(key: &str) -> Result<String, ValidationError> {
        let unknown = || ValidationError::UnknownField(key.trim().to_string());
        let (section, field) = key.trim().split_once('.').ok_or_else(unknown)?;
        let resolved = match section.to_lowercase().as_str() {
            "debts" => resolve_in::<Debts>(field),
            "assets" => resolve_in::<Assets>(field),
            "goals" => resolve_in::<Goals>(field),
            "income" => resolve_in::<Income>(field),
            "investing" => resolve_in::<Investing>(field),
            _ => None,
        };
        resolved.ok_or_else(unknown)
    }

    pub fn get(&self, key: &str) -> Result<String, ValidationError> {
        let key = Self::canonical_key(key)?;
        if key == RISK_TOLERANCE_KEY {
            return Ok(self
                .investing
                .risk_tolerance
                .map(|r| r.label().to_string())
                .unwrap_or_default());
        }
        let (section, field) = key.split_once('.').unwrap_or_default();
        let slot = match section {
            "debts" => self.debts.slot(field),
            "assets" => self.assets.slot(field),
            "goals" => self.goals.slot(field),
            "income" => self.income.slot(field),
            "investing" => self.investing.slot(field),
            _ => None,
        };
        slot.cloned()
            .ok_or_else(|| ValidationError::UnknownField(key.clone()))
    }

    /// Writes one field and returns the canonical key it landed on.
    pub fn set(&mut self, key: &str, value: &str) -> Result<String, ValidationError> {
        let key = Self::canonical_key(key)?;
        if key == RISK_TOLERANCE_KEY {
            self.investing.risk_tolerance = RiskTolerance::parse_optional(value)?;
            return Ok(key);
        }
        let (section, field) = key.split_once('.').unwrap_or_default();
        let slot = match section {
            "debts" => self.debts.slot_mut(field),
            "assets" => self.assets.slot_mut(field),
            "goals" => self.goals.slot_mut(field),
            "income" => self.income.slot_mut(field),
            "investing" => self.investing.slot_mut(field),
            _ => None,
        };
        let slot = slot.ok_or_else(|| ValidationError::UnknownField(key.clone()))?;
        *slot = value.trim().to_string();
        Ok(key)
    }

    /// All `(key, raw value)` pairs in form order.
    pub fn fields(&self) -> Vec<(String, String)> {
        Self::keys()
            .into_iter()
            .map(|k| {
                let v = self.get(&k).unwrap_or_default();
                (k, v)
            })
            .collect()
    }

    pub fn inputs(&self) -> FinancialInputs {
        FinancialInputs::from(self)
    }
}

/// Numeric view of a [`Profile`], parsed once at the boundary so the
/// calculator never sees text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FinancialInputs {
    pub mortgage: f64,
    pub car_loan: f64,
    pub credit_cards: f64,
    pub personal_loan: f64,
    pub student_loan: f64,
    pub other_debt: f64,
    pub number_of_credit_cards: f64,
    pub highest_card_apr: f64,
    pub avg_debt_apr: f64,

    pub cash: f64,
    pub savings_account: f64,
    pub checking_account: f64,
    pub hsa: f64,
    pub investments: f64,
    pub retirement: f64,
    pub property: f64,
    pub other_assets: f64,

    pub retirement_target_amount: f64,
    pub retirement_years_from_now: f64,

    pub monthly_gross: f64,
    pub monthly_net: f64,
    pub current_monthly_savings: f64,
    pub savings_increase_percent: f64,
    pub savings_increase_years: f64,

    pub expected_annual_return: f64,
    pub monthly_invest_for_goals: f64,
    pub house_goal_amount: f64,
    pub house_goal_years: f64,
    pub education_goal_amount: f64,
    pub education_goal_years: f64,
}

impl From<&Profile> for FinancialInputs {
    fn from(p: &Profile) -> Self {
        let n = parse_number_or_zero;
        FinancialInputs {
            mortgage: n(&p.debts.mortgage),
            car_loan: n(&p.debts.car_loan),
            credit_cards: n(&p.debts.credit_cards),
            personal_loan: n(&p.debts.personal_loan),
            student_loan: n(&p.debts.student_loan),
            other_debt: n(&p.debts.other_debt),
            number_of_credit_cards: n(&p.debts.number_of_credit_cards),
            highest_card_apr: n(&p.debts.highest_card_apr),
            avg_debt_apr: n(&p.debts.avg_debt_apr),

            cash: n(&p.assets.cash),
            savings_account: n(&p.assets.savings_account),
            checking_account: n(&p.assets.checking_account),
            hsa: n(&p.assets.hsa),
            investments: n(&p.assets.investments),
            retirement: n(&p.assets.retirement),
            property: n(&p.assets.property),
            other_assets: n(&p.assets.other_assets),

            retirement_target_amount: n(&p.goals.retirement_target_amount),
            retirement_years_from_now: n(&p.goals.retirement_years_from_now),

            monthly_gross: n(&p.income.monthly_gross),
            monthly_net: n(&p.income.monthly_net),
            current_monthly_savings: n(&p.income.current_monthly_savings),
            savings_increase_percent: n(&p.income.savings_increase_percent),
            savings_increase_years: n(&p.income.savings_increase_years),

            expected_annual_return: n(&p.investing.expected_annual_return),
            monthly_invest_for_goals: n(&p.investing.monthly_invest_for_goals),
            house_goal_amount: n(&p.investing.house_goal_amount),
            house_goal_years: n(&p.investing.house_goal_years),
            education_goal_amount: n(&p.investing.education_goal_amount),
            education_goal_years: n(&p.investing.education_goal_years),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_numbers_default_to_zero() {
        assert_eq!(parse_number_or_zero(""), 0.0);
        assert_eq!(parse_number_or_zero("abc"), 0.0);
        assert_eq!(parse_number_or_zero("1,000"), 0.0);
        assert_eq!(parse_number_or_zero("inf"), 0.0);
        assert_eq!(parse_number_or_zero(" 1250.5 "), 1250.5);
    }

    #[test]
    fn categories_parse_from_label_or_slug() {
        assert_eq!(
            "home-loan-emi".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::HomeLoanEmi
        );
        assert_eq!(
            "insurance (health / auto / home)"
                .parse::<ExpenseCategory>()
                .unwrap(),
            ExpenseCategory::Insurance
        );
        assert_eq!(ExpenseCategory::FoodAndBeverage.slug(), "food-beverage");
        assert!("Yachts".parse::<ExpenseCategory>().is_err());
        assert_eq!(
            ExpenseCategory::from("Yachts".to_string()),
            ExpenseCategory::Other("Yachts".into())
        );
    }

    #[test]
    fn needs_set_matches_fixed_obligations() {
        let needs: Vec<_> = ExpenseCategory::ALL
            .iter()
            .filter(|c| c.is_need())
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(needs.len(), 9);
        assert!(needs.contains(&"Rent".to_string()));
        assert!(!ExpenseCategory::Groceries.is_need());
        assert!(!ExpenseCategory::Other("Rent-ish".into()).is_need());
    }

    #[test]
    fn new_expense_rejects_bad_submissions() {
        assert_eq!(
            NewExpense::validate("Rent", "0", "2025-01-01", ""),
            Err(ValidationError::InvalidAmount("0".into()))
        );
        assert_eq!(
            NewExpense::validate("Rent", "abc", "2025-01-01", ""),
            Err(ValidationError::InvalidAmount("abc".into()))
        );
        assert_eq!(
            NewExpense::validate("Rent", "10", " ", ""),
            Err(ValidationError::MissingDate)
        );
        assert_eq!(
            NewExpense::validate("Rent", "10", "2025-13-01", ""),
            Err(ValidationError::InvalidDate("2025-13-01".into()))
        );
        let ok = NewExpense::validate("groceries", "42.10", "2025-02-03", "  weekly  ").unwrap();
        assert_eq!(ok.category, ExpenseCategory::Groceries);
        assert_eq!(ok.notes, "weekly");
    }

    #[test]
    fn profile_set_and_get_resolve_keys_case_insensitively() {
        let mut p = Profile::default();
        let key = p.set("income.monthlynet", " 5000 ").unwrap();
        assert_eq!(key, "income.monthlyNet");
        assert_eq!(p.income.monthly_net, "5000");
        assert_eq!(p.get("INCOME.monthlyNet").unwrap(), "5000");

        p.set("investing.riskTolerance", "moderate").unwrap();
        assert_eq!(p.investing.risk_tolerance, Some(RiskTolerance::Moderate));
        assert_eq!(p.get("investing.riskTolerance").unwrap(), "Moderate");
        p.set("investing.riskTolerance", "").unwrap();
        assert_eq!(p.investing.risk_tolerance, None);

        assert!(matches!(
            p.set("investing.riskTolerance", "yolo"),
            Err(ValidationError::InvalidRiskTolerance(_))
        ));
        assert!(matches!(
            p.set("income.bonus", "1"),
            Err(ValidationError::UnknownField(_))
        ));
        assert!(matches!(
            p.set("monthlyNet", "1"),
            Err(ValidationError::UnknownField(_))
        ));
    }

    #[test]
    fn fields_cover_every_key() {
        let p = Profile::default();
        let fields = p.fields();
        assert_eq!(fields.len(), Profile::keys().len());
        assert_eq!(fields[0].0, "debts.mortgage");
        assert!(fields.iter().any(|(k, _)| k == "debts.highestCardAPR"));
    }

    #[test]
    fn every_key_has_its_own_slot() {
        let mut p = Profile::default();
        for (n, key) in Profile::keys().iter().enumerate() {
            if key == RISK_TOLERANCE_KEY {
                continue;
            }
            p.set(key, &n.to_string()).unwrap();
        }
        for (n, (key, value)) in p.fields().into_iter().enumerate() {
            if key == RISK_TOLERANCE_KEY {
                assert_eq!(value, "");
            } else {
                assert_eq!(value, n.to_string(), "{key}");
            }
        }
        assert_eq!(p.investing.education_goal_years, (Profile::keys().len() - 1).to_string());
    }

    #[test]
    fn inputs_parse_every_section() {
        let mut p = Profile::default();
        p.set("debts.mortgage", "100").unwrap();
        p.set("assets.hsa", "oops").unwrap();
        p.set("investing.educationGoalYears", "4").unwrap();
        let i = p.inputs();
        assert_eq!(i.mortgage, 100.0);
        assert_eq!(i.hsa, 0.0);
        assert_eq!(i.education_goal_years, 4.0);
    }
}
