//! Interest on a principal: simple and compound, monthly rates

use crate::helpers::*;
use faiz_plugin::prelude::*;

// ============ Simple Interest ============

pub struct SimpleInterest;

static SIMPLE_INTEREST_INPUTS: [InputFieldSpec; 3] = [
    InputFieldSpec::new("principal", "Ana Para (TL)", "Örn: 100.000"),
    InputFieldSpec::new("rate", "Aylık Faiz Oranı (%)", "Örn: 4,5"),
    InputFieldSpec::new("time", "Süre (Ay)", "Örn: 12"),
];

impl FormulaPlugin for SimpleInterest {
    fn descriptor(&self) -> FormulaDescriptor {
        FormulaDescriptor {
            kind: CalculationKind::SimpleInterest,
            title: "Basit Faiz Değerleme",
            description: "Anaparanın vade sonundaki brüt faiz değerlemesini hesaplar.",
            // Banknotes
            icon: "M17 9V7a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2m2 4h10a2 2 0 002-2v-6a2 2 0 00-2-2H9a2 2 0 00-2 2v6a2 2 0 002 2zm7-5a2 2 0 11-4 0 2 2 0 014 0z",
            result_label: "Hesaplanan Faiz Tutarı",
            unit: ResultUnit::Currency,
            inputs: &SIMPLE_INTEREST_INPUTS,
        }
    }

    fn compute(&self, inputs: &InputRecord) -> Result<f64, FaizError> {
        let principal = require(inputs, "principal")?;
        let rate = require(inputs, "rate")?;
        let time = require(inputs, "time")?;
        Ok(simple_interest(principal, rate, time))
    }
}

/// Interest earned linearly: `principal * rate% * months`
pub fn simple_interest(principal: f64, rate: f64, months: f64) -> f64 {
    principal * percent(rate) * months
}

// ============ Compound Interest ============

pub struct CompoundInterest;

static COMPOUND_INTEREST_INPUTS: [InputFieldSpec; 3] = [
    InputFieldSpec::new("principal", "Ana Para (TL)", "Örn: 50.000"),
    InputFieldSpec::new("rate", "Aylık Faiz Oranı (%)", "Örn: 3,5"),
    InputFieldSpec::new("time", "Süre (Ay)", "Örn: 12"),
];

impl FormulaPlugin for CompoundInterest {
    fn descriptor(&self) -> FormulaDescriptor {
        FormulaDescriptor {
            kind: CalculationKind::CompoundInterest,
            title: "Bileşik Faiz Değerleme",
            description: "Aylık faiz ve vade üzerinden kümülatif faiz değerlemesini hesaplar.",
            // Trending up
            icon: "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
            result_label: "Hesaplanan Faiz Tutarı",
            unit: ResultUnit::Currency,
            inputs: &COMPOUND_INTEREST_INPUTS,
        }
    }

    fn compute(&self, inputs: &InputRecord) -> Result<f64, FaizError> {
        let principal = require(inputs, "principal")?;
        let rate = require(inputs, "rate")?;
        let time = require(inputs, "time")?;
        Ok(compound_interest(principal, rate, time))
    }
}

/// Interest only, not the final amount: `principal * (1 + rate%)^months - principal`
pub fn compound_interest(principal: f64, rate: f64, months: f64) -> f64 {
    let total = principal * compound_factor(percent(rate), months);
    total - principal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_interest() {
        // 100000 * 0.045 * 12
        assert_close(simple_interest(100000.0, 4.5, 12.0), 54000.0, 1e-6);
    }

    #[test]
    fn test_simple_interest_plugin() {
        let inputs = InputRecord::new()
            .with("principal", 100000.0)
            .with("rate", 4.5)
            .with("time", 12.0);
        assert_close(SimpleInterest.compute(&inputs).unwrap(), 54000.0, 1e-6);
    }

    #[test]
    fn test_simple_interest_missing_time() {
        let inputs = InputRecord::new().with("principal", 100000.0).with("rate", 4.5);
        let err = SimpleInterest.compute(&inputs).unwrap_err();
        assert_eq!(err.fields, vec!["time".to_string()]);
    }

    #[test]
    fn test_compound_interest() {
        // 50000 * 1.035^12 - 50000
        assert_close(compound_interest(50000.0, 3.5, 12.0), 25553.432867, 1e-4);
    }

    #[test]
    fn test_compound_interest_is_interest_only() {
        assert_eq!(compound_interest(50000.0, 3.5, 0.0), 0.0);
    }

    #[test]
    fn test_compound_exceeds_simple() {
        assert!(compound_interest(50000.0, 3.5, 12.0) > simple_interest(50000.0, 3.5, 12.0));
    }

    #[test]
    fn test_negative_rate_is_not_guarded() {
        // -100% wipes out the principal
        assert_close(compound_interest(1000.0, -100.0, 3.0), -1000.0, 1e-9);
    }
}
