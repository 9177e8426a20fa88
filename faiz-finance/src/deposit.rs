//! Net deposit return after withholding tax (stopaj)

use crate::helpers::*;
use faiz_plugin::prelude::*;

/// 365-day year with the percentage folded in
const DAY_COUNT_BASIS: f64 = 36500.0;

// ============ Deposit Return ============

pub struct DepositReturn;

static DEPOSIT_RETURN_INPUTS: [InputFieldSpec; 4] = [
    InputFieldSpec::new("principal", "Ana Para (TL)", "Örn: 100.000"),
    InputFieldSpec::new("rate", "Aylık Faiz Oranı (%)", "Örn: 3,5"),
    InputFieldSpec::new("days", "Gün Sayısı", "Örn: 32"),
    InputFieldSpec::new("taxRate", "Stopaj Oranı (%)", "Örn: 17,5"),
];

impl FormulaPlugin for DepositReturn {
    fn descriptor(&self) -> FormulaDescriptor {
        FormulaDescriptor {
            kind: CalculationKind::DepositReturn,
            title: "Mevduat Faiz Değerleme",
            description: "Yasal stopaj kesintileri sonrası net mevduat getirisi.",
            // Wallet
            icon: "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z",
            result_label: "Net Mevduat Getirisi",
            unit: ResultUnit::Currency,
            inputs: &DEPOSIT_RETURN_INPUTS,
        }
    }

    fn compute(&self, inputs: &InputRecord) -> Result<f64, FaizError> {
        let principal = require(inputs, "principal")?;
        let rate = require(inputs, "rate")?;
        let days = require(inputs, "days")?;
        let tax_rate = require(inputs, "taxRate")?;
        Ok(deposit_return(principal, rate, days, tax_rate))
    }
}

/// Gross interest for `days` at a monthly `rate`%, annualised by 12
pub fn deposit_gross(principal: f64, rate: f64, days: f64) -> f64 {
    let yearly_rate = rate * 12.0;
    principal * yearly_rate * days / DAY_COUNT_BASIS
}

/// Gross interest less `tax_rate`% withholding
pub fn deposit_return(principal: f64, rate: f64, days: f64, tax_rate: f64) -> f64 {
    deposit_gross(principal, rate, days) * (1.0 - percent(tax_rate))
}
