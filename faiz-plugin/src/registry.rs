//! Formula Registry

use crate::{FormulaDescriptor, FormulaPlugin};
use faiz_core::{CalculationKind, FaizError, InputRecord};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

struct Entry {
    descriptor: FormulaDescriptor,
    formula: Arc<dyn FormulaPlugin>,
}

/// Read-only mapping from every `CalculationKind` to its formula.
///
/// Built once; entries are stored in `CalculationKind::ALL` order so lookup
/// is an index, never a string match.
pub struct FormulaRegistry {
    entries: Vec<Entry>,
}

impl FormulaRegistry {
    /// Build a registry holding one formula per kind.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(CalculationKind) -> Arc<dyn FormulaPlugin>,
    {
        let entries = CalculationKind::ALL
            .iter()
            .map(|&kind| {
                let formula = f(kind);
                let descriptor = formula.descriptor();
                assert_eq!(descriptor.kind, kind, "formula registered under the wrong kind");
                Entry { descriptor, formula }
            })
            .collect();
        Self { entries }
    }

    fn entry(&self, kind: CalculationKind) -> &Entry {
        &self.entries[kind.index()]
    }

    /// Descriptor for `kind`. Total over the enumeration.
    pub fn lookup(&self, kind: CalculationKind) -> &FormulaDescriptor {
        &self.entry(kind).descriptor
    }

    pub fn formula(&self, kind: CalculationKind) -> &dyn FormulaPlugin {
        self.entry(kind).formula.as_ref()
    }

    /// Kinds in picker order
    pub fn kinds(&self) -> impl Iterator<Item = CalculationKind> + '_ {
        self.entries.iter().map(|e| e.descriptor.kind)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &FormulaDescriptor> {
        self.entries.iter().map(|e| &e.descriptor)
    }

    /// Check that every required field of `kind` is present and finite.
    pub fn validate(&self, kind: CalculationKind, inputs: &InputRecord) -> Result<(), FaizError> {
        let missing = inputs.missing(self.lookup(kind).keys());
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FaizError::incomplete_input(&missing))
        }
    }

    /// Validate, then run the formula for `kind`. A rejected record never
    /// reaches the formula.
    pub fn compute(&self, kind: CalculationKind, inputs: &InputRecord) -> Result<f64, FaizError> {
        self.validate(kind, inputs)?;
        self.formula(kind).compute(inputs)
    }

    /// Parse a user-supplied identifier, suggesting close matches on failure.
    pub fn resolve(&self, name: &str) -> Result<CalculationKind, FaizError> {
        name.parse::<CalculationKind>().map_err(|err| {
            let similar = self.find_similar(name);
            if similar.is_empty() {
                err
            } else {
                err.with_suggestion(format!(
                    "Similar: {}. Use list_formulas for the full list.",
                    similar.join(", ")
                ))
            }
        })
    }

    /// Identifiers similar to `name`, best first
    fn find_similar(&self, name: &str) -> Vec<&'static str> {
        let query = name.trim().to_lowercase().replace(['-', ' '], "_");
        let mut matches: Vec<(&'static str, usize)> = self
            .kinds()
            .filter_map(|kind| {
                let id = kind.as_str();
                let score = Self::similarity_score(&query, &id.to_lowercase());
                (score > 0).then_some((id, score))
            })
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().take(3).map(|(id, _)| id).collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }

        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Shared words weigh more than shared letters
        let shared_words = query
            .split('_')
            .filter(|w| w.len() > 2 && candidate.split('_').any(|c| c == *w))
            .count();
        score += shared_words * 20;

        if score == 0 {
            return 0;
        }

        let query_chars: std::collections::HashSet<char> = query.chars().collect();
        let candidate_chars: std::collections::HashSet<char> = candidate.chars().collect();
        score + query_chars.intersection(&candidate_chars).count()
    }

    /// General help, or the descriptor of one formula
    pub fn help(&self, name: Option<&str>) -> Result<JsonValue, FaizError> {
        match name {
            Some(n) => {
                let kind = self.resolve(n)?;
                Ok(Self::descriptor_to_help(self.lookup(kind)))
            }
            None => Ok(self.general_help()),
        }
    }

    fn general_help(&self) -> JsonValue {
        let formulas: Vec<JsonValue> = self
            .descriptors()
            .map(|d| json!({ "kind": d.kind, "title": d.title }))
            .collect();
        json!({
            "formulas": formulas,
            "usage": "Call describe_formula with a kind for its input fields."
        })
    }

    fn descriptor_to_help(d: &FormulaDescriptor) -> JsonValue {
        json!({
            "kind": d.kind,
            "title": d.title,
            "description": d.description,
            "result_label": d.result_label,
            "unit": d.unit,
            "icon": d.icon,
            "inputs": d.inputs,
        })
    }

    /// Summary of all formulas in picker order
    pub fn list(&self) -> JsonValue {
        JsonValue::Array(
            self.descriptors()
                .map(|d| {
                    json!({
                        "kind": d.kind,
                        "title": d.title,
                        "description": d.description,
                        "unit": d.unit,
                        "inputs": d.keys().collect::<Vec<_>>(),
                    })
                })
                .collect(),
        )
    }
}
