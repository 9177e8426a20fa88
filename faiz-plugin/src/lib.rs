//! Faiz Formula Registry
//!
//! Provides the static descriptors of each formula, the trait every
//! formula implements, and the registry that validates input records and
//! dispatches to the formula matching a `CalculationKind`.

mod registry;
mod traits;

pub use registry::FormulaRegistry;
pub use traits::{FormulaDescriptor, FormulaPlugin, InputFieldSpec, ResultUnit};

/// Re-export core types for formula authors
pub mod prelude {
    pub use crate::{FormulaDescriptor, FormulaPlugin, FormulaRegistry, InputFieldSpec, ResultUnit};
    pub use faiz_core::prelude::*;
}
