//! Calculator session
//!
//! Holds the selected formula, the values typed so far and the last result.
//! Any edit or formula change discards the result; a formula change also
//! discards every value so nothing carries over between formulas.

use crate::Summary;
use faiz_core::{parse_decimal, CalculationKind, FaizError, InputRecord};
use faiz_plugin::{FormulaDescriptor, FormulaRegistry};
use std::sync::Arc;
use tracing::debug;

pub struct Session {
    registry: Arc<FormulaRegistry>,
    kind: CalculationKind,
    inputs: InputRecord,
    result: Option<f64>,
}

impl Session {
    pub fn new(registry: Arc<FormulaRegistry>) -> Self {
        Self {
            registry,
            kind: CalculationKind::SimpleInterest,
            inputs: InputRecord::new(),
            result: None,
        }
    }

    pub fn kind(&self) -> CalculationKind {
        self.kind
    }

    pub fn descriptor(&self) -> &FormulaDescriptor {
        self.registry.lookup(self.kind)
    }

    pub fn inputs(&self) -> &InputRecord {
        &self.inputs
    }

    /// Last computed result, `None` after any change
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// Switch formula. Always starts from an empty record.
    pub fn select(&mut self, kind: CalculationKind) {
        debug!(from = %self.kind, to = %kind, "formula selected");
        self.kind = kind;
        self.inputs.clear();
        self.result = None;
    }

    /// Masked text entry for `key`.
    ///
    /// Empty text clears the field. Rejected text leaves the session as it was.
    pub fn set_input(&mut self, key: &str, raw: &str) -> Result<(), FaizError> {
        self.check_field(key)?;
        let parsed = parse_decimal(raw).map_err(|e| FaizError::from(e).with_field(key))?;

        match parsed {
            Some(value) => self.inputs.set(key, value),
            None => {
                self.inputs.remove(key);
            }
        }
        self.result = None;
        Ok(())
    }

    /// Numeric entry for callers that already hold a number
    pub fn set_value(&mut self, key: &str, value: f64) -> Result<(), FaizError> {
        self.check_field(key)?;
        self.inputs.set(key, value);
        self.result = None;
        Ok(())
    }

    pub fn clear_input(&mut self, key: &str) -> Result<(), FaizError> {
        self.check_field(key)?;
        self.inputs.remove(key);
        self.result = None;
        Ok(())
    }

    /// Validate the record and run the selected formula.
    ///
    /// On rejection nothing is computed and the stored result is untouched.
    pub fn calculate(&mut self) -> Result<f64, FaizError> {
        match self.registry.compute(self.kind, &self.inputs) {
            Ok(value) => {
                debug!(kind = %self.kind, result = value, "calculated");
                self.result = Some(value);
                Ok(value)
            }
            Err(err) => {
                debug!(kind = %self.kind, missing = ?err.fields, "calculation rejected");
                Err(err)
            }
        }
    }

    /// Result summary, once a result exists
    pub fn summary(&self) -> Option<Summary> {
        self.result
            .map(|result| Summary::new(self.descriptor(), &self.inputs, result))
    }

    fn check_field(&self, key: &str) -> Result<(), FaizError> {
        let descriptor = self.descriptor();
        if descriptor.requires(key) {
            Ok(())
        } else {
            Err(FaizError::unknown_field(key, descriptor.kind.as_str()))
        }
    }
}
