// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Rejections raised while editing the profile or submitting an expense.
///
/// The calculator itself never fails; these only guard user edits before
/// they reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown profile field '{0}' (see `nestegg profile show` for valid keys)")]
    UnknownField(String),

    #[error("Invalid risk tolerance '{0}', expected Conservative, Moderate or Aggressive")]
    InvalidRiskTolerance(String),

    #[error("Unknown expense category '{0}' (see `nestegg category list`)")]
    UnknownCategory(String),

    #[error("Please enter a valid amount greater than zero (got '{0}')")]
    InvalidAmount(String),

    #[error("Please select a date for the expense")]
    MissingDate,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
