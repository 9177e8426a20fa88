//! Present value of a single future cash flow

use crate::helpers::*;
use faiz_plugin::prelude::*;

// ============ NPV (Net Present Value) ============

pub struct Npv;

static NPV_INPUTS: [InputFieldSpec; 3] = [
    InputFieldSpec::new("cashFlow", "Gelecekteki Nakit (TL)", "Örn: 100.000"),
    InputFieldSpec::new("discountRate", "Yıllık İskonto Oranı (%)", "Örn: 30"),
    InputFieldSpec::new("year", "Süre (Yıl)", "Örn: 3"),
];

impl FormulaPlugin for Npv {
    fn descriptor(&self) -> FormulaDescriptor {
        FormulaDescriptor {
            kind: CalculationKind::Npv,
            title: "Yatırım Değerleme (NPV)",
            description: "Gelecekteki nakit akışlarının bugünkü değer (Net Present Value) hesabı.",
            // Briefcase
            icon: "M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            result_label: "Net Bugünkü Değer",
            unit: ResultUnit::Currency,
            inputs: &NPV_INPUTS,
        }
    }

    fn compute(&self, inputs: &InputRecord) -> Result<f64, FaizError> {
        let cash_flow = require(inputs, "cashFlow")?;
        let discount_rate = require(inputs, "discountRate")?;
        let year = require(inputs, "year")?;
        Ok(npv(cash_flow, discount_rate, year))
    }
}

/// `cash_flow / (1 + discount_rate%)^years`
pub fn npv(cash_flow: f64, discount_rate: f64, years: f64) -> f64 {
    cash_flow / compound_factor(percent(discount_rate), years)
}
