//! Formula traits

use faiz_core::{CalculationKind, FaizError, InputRecord};
use serde::Serialize;

/// One required input of a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputFieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

impl InputFieldSpec {
    pub const fn new(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self { key, label, placeholder }
    }
}

/// How a formula's result is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultUnit {
    /// Amount of money
    Currency,
    /// Rate in percent
    Percent,
}

/// Static metadata for a formula
#[derive(Debug, Clone, Serialize)]
pub struct FormulaDescriptor {
    pub kind: CalculationKind,
    pub title: &'static str,
    pub description: &'static str,
    /// SVG path data
    pub icon: &'static str,
    pub result_label: &'static str,
    pub unit: ResultUnit,
    pub inputs: &'static [InputFieldSpec],
}

impl FormulaDescriptor {
    /// Required keys in display order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inputs.iter().map(|f| f.key)
    }

    pub fn field(&self, key: &str) -> Option<&'static InputFieldSpec> {
        self.inputs.iter().find(|f| f.key == key)
    }

    pub fn requires(&self, key: &str) -> bool {
        self.field(key).is_some()
    }
}

/// A single closed-form calculation
pub trait FormulaPlugin: Send + Sync {
    fn descriptor(&self) -> FormulaDescriptor;

    /// Compute the result. Missing keys are reported as `INCOMPLETE_INPUT`;
    /// arithmetic is never guarded.
    fn compute(&self, inputs: &InputRecord) -> Result<f64, FaizError>;
}
