//! Equal-installment loan payment (PMT)

use crate::helpers::*;
use faiz_plugin::prelude::*;

// ============ Loan Payment ============

pub struct LoanPayment;

static LOAN_PAYMENT_INPUTS: [InputFieldSpec; 3] = [
    InputFieldSpec::new("principal", "Kredi Tutarı (TL)", "Örn: 250.000"),
    InputFieldSpec::new("rate", "Aylık Faiz Oranı (%)", "Örn: 2,89"),
    InputFieldSpec::new("months", "Vade (Ay)", "Örn: 36"),
];

impl FormulaPlugin for LoanPayment {
    fn descriptor(&self) -> FormulaDescriptor {
        FormulaDescriptor {
            kind: CalculationKind::LoanPayment,
            title: "Kredi Faiz Değerleme",
            description: "Aylık eşit taksitli kredi tutar değerlemesini hesaplar. Başka kesintilerin olmadığını varsayar.",
            // Bank
            icon: "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4",
            result_label: "Aylık Taksit Tutarı",
            unit: ResultUnit::Currency,
            inputs: &LOAN_PAYMENT_INPUTS,
        }
    }

    fn compute(&self, inputs: &InputRecord) -> Result<f64, FaizError> {
        let principal = require(inputs, "principal")?;
        let rate = require(inputs, "rate")?;
        let months = require(inputs, "months")?;
        Ok(loan_payment(principal, rate, months))
    }
}

/// Monthly installment for `principal` at a monthly `rate`% over `months`.
///
/// A zero rate falls back to straight-line repayment.
pub fn loan_payment(principal: f64, rate: f64, months: f64) -> f64 {
    let r = percent(rate);
    if r == 0.0 {
        return principal / months;
    }

    // P * r * (1+r)^n / ((1+r)^n - 1)
    let factor = compound_factor(r, months);
    principal * r * factor / (factor - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loan_payment() {
        let r: f64 = 0.0289;
        let factor = (1.0 + r).powf(36.0);
        let expected = 250000.0 * r * factor / (factor - 1.0);
        assert_close(loan_payment(250000.0, 2.89, 36.0), expected, 1e-9);
        assert_close(loan_payment(250000.0, 2.89, 36.0), 11263.779165, 1e-4);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(loan_payment(120000.0, 0.0, 12.0), 10000.0);
    }

    #[test]
    fn test_payments_cover_principal() {
        let pmt = loan_payment(250000.0, 2.89, 36.0);
        assert!(pmt * 36.0 > 250000.0);
    }

    #[test]
    fn test_zero_months_is_not_guarded() {
        assert!(loan_payment(1000.0, 0.0, 0.0).is_infinite());
        // (1+r)^0 - 1 == 0
        assert!(loan_payment(1000.0, 2.0, 0.0).is_infinite());
    }

    #[test]
    fn test_plugin_reads_months() {
        let inputs = InputRecord::new()
            .with("principal", 120000.0)
            .with("rate", 0.0)
            .with("months", 12.0);
        assert_eq!(LoanPayment.compute(&inputs).unwrap(), 10000.0);
    }
}
