//! Commercial paper discounting on a 360-day year

use crate::helpers::*;
use faiz_plugin::prelude::*;

/// Commercial day-count convention
const COMMERCIAL_YEAR: f64 = 360.0;

static DISCOUNT_INPUTS_90: [InputFieldSpec; 3] = [
    InputFieldSpec::new("nominalValue", "Nominal Değer (TL)", "Örn: 50.000"),
    InputFieldSpec::new("rate", "Yıllık Faiz Oranı (%)", "Örn: 30"),
    InputFieldSpec::new("days", "Gün Sayısı", "Örn: 90"),
];

static DISCOUNT_INPUTS_180: [InputFieldSpec; 3] = [
    InputFieldSpec::new("nominalValue", "Nominal Değer (TL)", "Örn: 50.000"),
    InputFieldSpec::new("rate", "Yıllık Faiz Oranı (%)", "Örn: 30"),
    InputFieldSpec::new("days", "Gün Sayısı", "Örn: 180"),
];

// ============ Internal (true) Discount ============

pub struct InternalDiscount;

impl FormulaPlugin for InternalDiscount {
    fn descriptor(&self) -> FormulaDescriptor {
        FormulaDescriptor {
            kind: CalculationKind::InternalDiscount,
            title: "İç İskonto (Peşin Değer)",
            description: "Senedin iç iskonto yöntemiyle bugünkü peşin değeri.",
            // Document
            icon: "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
            result_label: "Peşin / İskontolu Değer",
            unit: ResultUnit::Currency,
            inputs: &DISCOUNT_INPUTS_90,
        }
    }

    fn compute(&self, inputs: &InputRecord) -> Result<f64, FaizError> {
        let nominal_value = require(inputs, "nominalValue")?;
        let rate = require(inputs, "rate")?;
        let days = require(inputs, "days")?;
        Ok(internal_discount(nominal_value, rate, days))
    }
}

/// Present value: `nominal * 360 / (360 + rate * days)`
pub fn internal_discount(nominal_value: f64, rate: f64, days: f64) -> f64 {
    nominal_value * COMMERCIAL_YEAR / (COMMERCIAL_YEAR + rate * days)
}

// ============ External (commercial) Discount ============

pub struct ExternalDiscount;

impl FormulaPlugin for ExternalDiscount {
    fn descriptor(&self) -> FormulaDescriptor {
        FormulaDescriptor {
            kind: CalculationKind::ExternalDiscount,
            title: "Dış İskonto (Ticari)",
            description: "Ticari işlemlerde kullanılan dış iskonto (kesinti) hesabı.",
            // Tag
            icon: "M7 7h.01M7 3h5c.512 0 1.024.195 1.414.586l7 7a2 2 0 010 2.828l-7 7a2 2 0 01-2.828 0l-7-7A1.994 1.994 0 013 12V7a4 4 0 014-4z",
            result_label: "Peşin / İskontolu Değer",
            unit: ResultUnit::Currency,
            inputs: &DISCOUNT_INPUTS_180,
        }
    }

    fn compute(&self, inputs: &InputRecord) -> Result<f64, FaizError> {
        let nominal_value = require(inputs, "nominalValue")?;
        let rate = require(inputs, "rate")?;
        let days = require(inputs, "days")?;
        Ok(external_discount(nominal_value, rate, days))
    }
}

/// Present value: `nominal - nominal * rate * days / 360`
pub fn external_discount(nominal_value: f64, rate: f64, days: f64) -> f64 {
    let discount_amount = nominal_value * (rate * days) / COMMERCIAL_YEAR;
    nominal_value - discount_amount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_discount() {
        // 50000 * 360 / (360 + 30 * 90)
        assert_close(internal_discount(50000.0, 30.0, 90.0), 5882.352941, 1e-4);
    }

    #[test]
    fn test_external_discount() {
        // 50000 - 50000 * 30 * 180 / 360
        assert_eq!(external_discount(50000.0, 30.0, 180.0), -700000.0);
    }

    #[test]
    fn test_small_rate_keeps_value_positive() {
        assert_close(external_discount(50000.0, 0.3, 180.0), 42500.0, 1e-9);
    }

    #[test]
    fn test_internal_below_nominal() {
        let pv = internal_discount(50000.0, 0.3, 180.0);
        assert!(pv < 50000.0);
        // true discount is always smaller than commercial discount
        assert!(pv > external_discount(50000.0, 0.3, 180.0));
    }

    #[test]
    fn test_internal_zero_denominator_is_not_guarded() {
        assert!(internal_discount(50000.0, -4.0, 90.0).is_infinite());
    }

    #[test]
    fn test_placeholders_differ() {
        assert_eq!(InternalDiscount.descriptor().inputs[2].placeholder, "Örn: 90");
        assert_eq!(ExternalDiscount.descriptor().inputs[2].placeholder, "Örn: 180");
    }
}
