//! Calculation kinds

use crate::FaizError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight supported formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CalculationKind {
    #[serde(rename = "SIMPLE_INTEREST")]
    SimpleInterest,
    #[serde(rename = "COMPOUND_INTEREST")]
    CompoundInterest,
    #[serde(rename = "LOAN_PMT")]
    LoanPayment,
    #[serde(rename = "REAL_INTEREST")]
    RealInterest,
    #[serde(rename = "NPV")]
    Npv,
    #[serde(rename = "DEPOSIT_RETURN")]
    DepositReturn,
    #[serde(rename = "INTERNAL_DISCOUNT")]
    InternalDiscount,
    #[serde(rename = "EXTERNAL_DISCOUNT")]
    ExternalDiscount,
}

impl CalculationKind {
    /// All kinds in picker order
    pub const ALL: [CalculationKind; 8] = [
        CalculationKind::SimpleInterest,
        CalculationKind::CompoundInterest,
        CalculationKind::LoanPayment,
        CalculationKind::DepositReturn,
        CalculationKind::Npv,
        CalculationKind::RealInterest,
        CalculationKind::InternalDiscount,
        CalculationKind::ExternalDiscount,
    ];

    /// Stable identifier, identical to the serialized form
    pub const fn as_str(self) -> &'static str {
        match self {
            CalculationKind::SimpleInterest => "SIMPLE_INTEREST",
            CalculationKind::CompoundInterest => "COMPOUND_INTEREST",
            CalculationKind::LoanPayment => "LOAN_PMT",
            CalculationKind::RealInterest => "REAL_INTEREST",
            CalculationKind::Npv => "NPV",
            CalculationKind::DepositReturn => "DEPOSIT_RETURN",
            CalculationKind::InternalDiscount => "INTERNAL_DISCOUNT",
            CalculationKind::ExternalDiscount => "EXTERNAL_DISCOUNT",
        }
    }

    /// Position in `ALL`
    pub const fn index(self) -> usize {
        match self {
            CalculationKind::SimpleInterest => 0,
            CalculationKind::CompoundInterest => 1,
            CalculationKind::LoanPayment => 2,
            CalculationKind::DepositReturn => 3,
            CalculationKind::Npv => 4,
            CalculationKind::RealInterest => 5,
            CalculationKind::InternalDiscount => 6,
            CalculationKind::ExternalDiscount => 7,
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationKind {
    type Err = FaizError;

    /// Case-insensitive; `-` and spaces count as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        if normalized == "LOAN_PAYMENT" {
            return Ok(CalculationKind::LoanPayment);
        }

        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| FaizError::unknown_formula(s))
    }
}
