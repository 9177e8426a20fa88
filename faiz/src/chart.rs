//! Bar-chart breakdown of a result

use faiz_core::{CalculationKind, InputRecord};
use serde::Serialize;

/// Bars never shrink below this share of the tallest one
pub const MIN_HEIGHT_PERCENT: f64 = 15.0;

/// Colour role of a bar; the front-end maps it to its palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarTone {
    Neutral,
    Accent,
    Emphasis,
    Alert,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub tone: BarTone,
}

impl Bar {
    fn new(label: &'static str, value: f64, tone: BarTone) -> Self {
        Self { label, value, tone }
    }
}

/// Bars for a computed result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Chart {
    bars: Vec<Bar>,
}

impl Chart {
    pub fn build(kind: CalculationKind, inputs: &InputRecord, result: f64) -> Self {
        let base = inputs
            .get_nonzero("principal")
            .or_else(|| inputs.get_nonzero("cashFlow"))
            .or_else(|| inputs.get_nonzero("nominalValue"))
            .unwrap_or(0.0);

        let bars = match kind {
            CalculationKind::SimpleInterest
            | CalculationKind::CompoundInterest
            | CalculationKind::DepositReturn => vec![
                Bar::new("Anapara", base, BarTone::Neutral),
                Bar::new("Faiz", result, BarTone::Accent),
                Bar::new("Toplam", base + result, BarTone::Emphasis),
            ],
            CalculationKind::LoanPayment => {
                let total = result * inputs.get("months").unwrap_or(0.0);
                vec![
                    Bar::new("Kredi", base, BarTone::Neutral),
                    Bar::new("Faiz", total - base, BarTone::Alert),
                    Bar::new("Toplam", total, BarTone::Emphasis),
                ]
            }
            CalculationKind::RealInterest => vec![
                Bar::new("Nominal", inputs.get("nominalRate").unwrap_or(0.0), BarTone::Neutral),
                Bar::new("Enflasyon", inputs.get("inflationRate").unwrap_or(0.0), BarTone::Alert),
                Bar::new("Reel", result, BarTone::Positive),
            ],
            CalculationKind::Npv
            | CalculationKind::InternalDiscount
            | CalculationKind::ExternalDiscount => vec![
                Bar::new("Gelecek", base, BarTone::Neutral),
                Bar::new("Bugünkü", result, BarTone::Accent),
            ],
        };

        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest bar value
    pub fn max(&self) -> f64 {
        self.bars
            .iter()
            .map(|b| b.value)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Height of `bar` relative to the tallest bar, floored at 15%
    pub fn height_percent(&self, bar: &Bar) -> f64 {
        (bar.value / self.max() * 100.0).max(MIN_HEIGHT_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(chart: &Chart) -> Vec<&'static str> {
        chart.bars().iter().map(|b| b.label).collect()
    }

    #[test]
    fn test_interest_bars() {
        let inputs = InputRecord::new().with("principal", 100000.0);
        let chart = Chart::build(CalculationKind::SimpleInterest, &inputs, 54000.0);
        assert_eq!(labels(&chart), vec!["Anapara", "Faiz", "Toplam"]);
        assert_eq!(chart.bars()[2].value, 154000.0);
        assert_eq!(chart.max(), 154000.0);
    }

    #[test]
    fn test_loan_bars() {
        let inputs = InputRecord::new().with("principal", 120000.0).with("months", 12.0);
        let chart = Chart::build(CalculationKind::LoanPayment, &inputs, 11000.0);
        assert_eq!(labels(&chart), vec!["Kredi", "Faiz", "Toplam"]);
        assert_eq!(chart.bars()[1].value, 12000.0);
        assert_eq!(chart.bars()[2].value, 132000.0);
    }

    #[test]
    fn test_real_interest_bars_use_rates() {
        let inputs = InputRecord::new().with("nominalRate", 50.0).with("inflationRate", 32.0);
        let chart = Chart::build(CalculationKind::RealInterest, &inputs, 13.6);
        assert_eq!(labels(&chart), vec!["Nominal", "Enflasyon", "Reel"]);
        assert_eq!(chart.bars()[1].tone, BarTone::Alert);
    }

    #[test]
    fn test_present_value_bars_fall_back_through_bases() {
        let inputs = InputRecord::new().with("cashFlow", 100000.0);
        let chart = Chart::build(CalculationKind::Npv, &inputs, 45516.6);
        assert_eq!(labels(&chart), vec!["Gelecek", "Bugünkü"]);
        assert_eq!(chart.bars()[0].value, 100000.0);

        let inputs = InputRecord::new().with("nominalValue", 50000.0);
        let chart = Chart::build(CalculationKind::ExternalDiscount, &inputs, 42500.0);
        assert_eq!(chart.bars()[0].value, 50000.0);
    }

    #[test]
    fn test_zero_principal_falls_through() {
        let inputs = InputRecord::new().with("principal", 0.0).with("nominalValue", 700.0);
        let chart = Chart::build(CalculationKind::SimpleInterest, &inputs, 0.0);
        assert_eq!(chart.bars()[0].value, 700.0);
    }

    #[test]
    fn test_height_has_floor() {
        let inputs = InputRecord::new().with("principal", 100000.0);
        let chart = Chart::build(CalculationKind::SimpleInterest, &inputs, 1000.0);
        let bars = chart.bars();
        assert_eq!(chart.height_percent(&bars[2]), 100.0);
        assert_eq!(chart.height_percent(&bars[1]), MIN_HEIGHT_PERCENT);
        assert!((chart.height_percent(&bars[0]) - 100000.0 / 101000.0 * 100.0).abs() < 1e-9);
    }
}
