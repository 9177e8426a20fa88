//! Inflation-adjusted rate of return

use crate::helpers::*;
use faiz_plugin::prelude::*;

// ============ Real Interest ============

pub struct RealInterest;

static REAL_INTEREST_INPUTS: [InputFieldSpec; 2] = [
    InputFieldSpec::new("nominalRate", "Nominal Faiz (%)", "Örn: 50"),
    InputFieldSpec::new("inflationRate", "Yıllık Enflasyon Oranı (%)", "Örn: 32"),
];

impl FormulaPlugin for RealInterest {
    fn descriptor(&self) -> FormulaDescriptor {
        FormulaDescriptor {
            kind: CalculationKind::RealInterest,
            title: "Reel Getiri Analizi",
            description: "Enflasyon etkisinden arındırılmış gerçek (reel) kazanç oranı.",
            // Bar chart
            icon: "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
            result_label: "Reel Getiri Oranı",
            unit: ResultUnit::Percent,
            inputs: &REAL_INTEREST_INPUTS,
        }
    }

    fn compute(&self, inputs: &InputRecord) -> Result<f64, FaizError> {
        let nominal = require(inputs, "nominalRate")?;
        let inflation = require(inputs, "inflationRate")?;
        Ok(real_interest(nominal, inflation))
    }
}

/// Fisher real rate in percent: `((1 + nominal%) / (1 + inflation%) - 1) * 100`
pub fn real_interest(nominal_rate: f64, inflation_rate: f64) -> f64 {
    let nominal = 1.0 + percent(nominal_rate);
    let inflation = 1.0 + percent(inflation_rate);
    (nominal / inflation - 1.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_interest() {
        // 1.50 / 1.32 - 1 = 13.6363...%
        assert_close(real_interest(50.0, 32.0), 13.636363636, 1e-6);
    }

    #[test]
    fn test_equal_rates_give_zero() {
        assert_close(real_interest(25.0, 25.0), 0.0, 1e-12);
    }

    #[test]
    fn test_inflation_above_nominal_is_negative() {
        assert!(real_interest(20.0, 60.0) < 0.0);
    }

    #[test]
    fn test_minus_hundred_inflation_is_not_guarded() {
        assert!(real_interest(10.0, -100.0).is_infinite());
    }
}
