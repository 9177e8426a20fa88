//! Result summary: label, secondary value and chart

use crate::chart::Chart;
use faiz_core::{CalculationKind, InputRecord};
use faiz_plugin::{FormulaDescriptor, ResultUnit};
use serde::Serialize;

/// A value derived from the result for display, e.g. principal + interest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Secondary {
    pub label: &'static str,
    pub value: f64,
}

/// Everything a front-end shows after a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub kind: CalculationKind,
    pub title: &'static str,
    pub result_label: &'static str,
    pub unit: ResultUnit,
    pub result: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Secondary>,
    pub chart: Chart,
}

impl Summary {
    pub fn new(descriptor: &FormulaDescriptor, inputs: &InputRecord, result: f64) -> Self {
        Self {
            kind: descriptor.kind,
            title: descriptor.title,
            result_label: descriptor.result_label,
            unit: descriptor.unit,
            result,
            secondary: secondary(descriptor.kind, inputs, result),
            chart: Chart::build(descriptor.kind, inputs, result),
        }
    }
}

/// Shown only when the input it builds on is present and non-zero
fn secondary(kind: CalculationKind, inputs: &InputRecord, result: f64) -> Option<Secondary> {
    match kind {
        CalculationKind::SimpleInterest | CalculationKind::CompoundInterest => {
            inputs.get_nonzero("principal").map(|principal| Secondary {
                label: "Toplam Brüt Değer",
                value: principal + result,
            })
        }
        CalculationKind::DepositReturn => inputs.get_nonzero("principal").map(|principal| Secondary {
            label: "Toplam Net Bakiye",
            value: principal + result,
        }),
        CalculationKind::LoanPayment => inputs.get_nonzero("months").map(|months| Secondary {
            label: "Toplam Brüt Değer",
            value: result * months,
        }),
        CalculationKind::RealInterest
        | CalculationKind::Npv
        | CalculationKind::InternalDiscount
        | CalculationKind::ExternalDiscount => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_total() {
        let inputs = InputRecord::new().with("principal", 100000.0);
        let s = secondary(CalculationKind::CompoundInterest, &inputs, 25553.43).unwrap();
        assert_eq!(s.label, "Toplam Brüt Değer");
        assert!((s.value - 125553.43).abs() < 1e-9);
    }

    #[test]
    fn test_deposit_net_balance() {
        let inputs = InputRecord::new().with("principal", 100000.0);
        let s = secondary(CalculationKind::DepositReturn, &inputs, 3037.81).unwrap();
        assert_eq!(s.label, "Toplam Net Bakiye");
        assert!((s.value - 103037.81).abs() < 1e-9);
    }

    #[test]
    fn test_loan_total_repayment() {
        let inputs = InputRecord::new().with("months", 12.0);
        let s = secondary(CalculationKind::LoanPayment, &inputs, 10000.0).unwrap();
        assert_eq!(s.value, 120000.0);
    }

    #[test]
    fn test_zero_principal_hides_secondary() {
        let inputs = InputRecord::new().with("principal", 0.0);
        assert!(secondary(CalculationKind::SimpleInterest, &inputs, 0.0).is_none());
    }

    #[test]
    fn test_no_secondary_for_rates_and_discounts() {
        let inputs = InputRecord::new().with("nominalValue", 50000.0);
        assert!(secondary(CalculationKind::InternalDiscount, &inputs, 5882.35).is_none());
        assert!(secondary(CalculationKind::RealInterest, &inputs, 13.6).is_none());
    }
}
