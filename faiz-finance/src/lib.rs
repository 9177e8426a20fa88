//! Faiz Finance Formulas
//!
//! The eight closed-form calculations behind the calculator: simple and
//! compound interest, loan installments, real return, present value of a
//! single cash flow, net deposit return, and internal/external discount.
//! All calculations use plain `f64`; division by zero is never guarded
//! except for the zero-rate loan.

mod deposit;
mod discount;
mod helpers;
mod interest;
mod loans;
mod rates;
mod tvm;

pub use deposit::{deposit_gross, deposit_return, DepositReturn};
pub use discount::{external_discount, internal_discount, ExternalDiscount, InternalDiscount};
pub use interest::{compound_interest, simple_interest, CompoundInterest, SimpleInterest};
pub use loans::{loan_payment, LoanPayment};
pub use rates::{real_interest, RealInterest};
pub use tvm::{npv, Npv};

use faiz_core::CalculationKind;
use faiz_plugin::{FormulaPlugin, FormulaRegistry};
use std::sync::Arc;

/// The formula implementing `kind`
pub fn formula_for(kind: CalculationKind) -> Arc<dyn FormulaPlugin> {
    match kind {
        CalculationKind::SimpleInterest => Arc::new(SimpleInterest),
        CalculationKind::CompoundInterest => Arc::new(CompoundInterest),
        CalculationKind::LoanPayment => Arc::new(LoanPayment),
        CalculationKind::RealInterest => Arc::new(RealInterest),
        CalculationKind::Npv => Arc::new(Npv),
        CalculationKind::DepositReturn => Arc::new(DepositReturn),
        CalculationKind::InternalDiscount => Arc::new(InternalDiscount),
        CalculationKind::ExternalDiscount => Arc::new(ExternalDiscount),
    }
}

/// Registry with every formula loaded
pub fn standard_registry() -> FormulaRegistry {
    FormulaRegistry::from_fn(formula_for)
}
