//! Faiz - Simple financial calculator
//!
//! Ties the formula registry to a stateful `Session` and renders results
//! with Turkish number formatting.

mod chart;
mod render;
mod session;
mod summary;

pub use chart::{Bar, BarTone, Chart, MIN_HEIGHT_PERCENT};
pub use render::{DisplayConfig, Renderer};
pub use session::Session;
pub use summary::{Secondary, Summary};

pub use faiz_core::{CalculationKind, FaizError, InputRecord};
pub use faiz_plugin::{FormulaDescriptor, FormulaRegistry, InputFieldSpec, ResultUnit};

use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Main Faiz engine
pub struct Faiz {
    registry: Arc<FormulaRegistry>,
    display: DisplayConfig,
}

impl Faiz {
    pub fn new(registry: FormulaRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            display: DisplayConfig::default(),
        }
    }

    pub fn with_standard_library() -> Self {
        Self::new(faiz_finance::standard_registry())
    }

    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    pub fn registry(&self) -> &FormulaRegistry {
        &self.registry
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Fresh session sharing this engine's registry
    pub fn session(&self) -> Session {
        Session::new(self.registry.clone())
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.display.clone())
    }

    pub fn lookup(&self, kind: CalculationKind) -> &FormulaDescriptor {
        self.registry.lookup(kind)
    }

    pub fn compute(&self, kind: CalculationKind, inputs: &InputRecord) -> Result<f64, FaizError> {
        self.registry.compute(kind, inputs)
    }

    pub fn help(&self, name: Option<&str>) -> Result<JsonValue, FaizError> {
        self.registry.help(name)
    }

    pub fn list_formulas(&self) -> JsonValue {
        self.registry.list()
    }
}

impl Default for Faiz {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_independent() {
        let faiz = Faiz::default();
        let mut a = faiz.session();
        let b = faiz.session();
        a.select(CalculationKind::Npv);
        assert_eq!(b.kind(), CalculationKind::SimpleInterest);
    }

    #[test]
    fn test_compute_through_engine() {
        let faiz = Faiz::default();
        let inputs = InputRecord::new()
            .with("nominalValue", 50000.0)
            .with("rate", 30.0)
            .with("days", 180.0);
        let value = faiz.compute(CalculationKind::ExternalDiscount, &inputs).unwrap();
        assert_eq!(value, -700000.0);
        assert_eq!(faiz.lookup(CalculationKind::ExternalDiscount).inputs.len(), 3);
    }

    #[test]
    fn test_renderer_uses_display() {
        let faiz = Faiz::default().with_display(DisplayConfig::default().with_currency("USD"));
        let mut s = faiz.session();
        s.set_value("principal", 100000.0).unwrap();
        s.set_value("rate", 4.5).unwrap();
        s.set_value("time", 12.0).unwrap();
        s.calculate().unwrap();
        assert!(faiz.renderer().render(&s).contains("54.000,00 USD"));
    }

    #[test]
    fn test_list_formulas() {
        let list = Faiz::default().list_formulas();
        assert_eq!(list.as_array().unwrap().len(), 8);
    }
}
