//! Display formatting and markdown rendering
//!
//! Numbers are shown the Turkish way by default: `.` groups thousands,
//! `,` separates decimals, amounts carry a `TL` suffix and rates a `%`
//! prefix. The engine never rounds; all rounding happens here.

use crate::{Session, MIN_HEIGHT_PERCENT};
use faiz_plugin::ResultUnit;
use std::env;

/// Number presentation settings
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub currency_suffix: String,
    pub currency_places: usize,
    pub percent_places: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            thousands_separator: '.',
            decimal_separator: ',',
            currency_suffix: "TL".to_string(),
            currency_places: 2,
            percent_places: 2,
        }
    }
}

impl DisplayConfig {
    /// Defaults, with `FAIZ_CURRENCY` overriding the currency suffix
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let config = Self::default();
        match lookup("FAIZ_CURRENCY").filter(|c| !c.trim().is_empty()) {
            Some(currency) => config.with_currency(currency.trim()),
            None => config,
        }
    }

    pub fn with_currency(mut self, suffix: impl Into<String>) -> Self {
        self.currency_suffix = suffix.into();
        self
    }

    pub fn with_separators(mut self, thousands: char, decimal: char) -> Self {
        self.thousands_separator = thousands;
        self.decimal_separator = decimal;
        self
    }

    pub fn with_currency_places(mut self, places: usize) -> Self {
        self.currency_places = places;
        self
    }

    pub fn with_percent_places(mut self, places: usize) -> Self {
        self.percent_places = places;
        self
    }

    /// Group thousands and keep between `min_places` and `max_places` decimals
    pub fn format_number(&self, value: f64, min_places: usize, max_places: usize) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let rounded = format!("{:.*}", max_places, value.abs());
        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rounded.as_str(), ""),
        };

        let mut frac = frac_part.trim_end_matches('0');
        if frac.len() < min_places {
            frac = &frac_part[..min_places.min(frac_part.len())];
        }

        let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 2);
        let is_zero = rounded.bytes().all(|b| b == b'0' || b == b'.');
        if value < 0.0 && !is_zero {
            out.push('-');
        }
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(self.thousands_separator);
            }
            out.push(digit);
        }
        if !frac.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    /// `54.000,00 TL` or `%13,64`
    pub fn format_result(&self, value: f64, unit: ResultUnit) -> String {
        match unit {
            ResultUnit::Currency => format!(
                "{} {}",
                self.format_number(value, self.currency_places, self.currency_places),
                self.currency_suffix
            ),
            ResultUnit::Percent => format!("%{}", self.format_number(value, 0, self.percent_places)),
        }
    }

    /// Field values as typed, up to ten decimals
    pub fn format_input(&self, value: f64) -> String {
        self.format_number(value, 0, 10)
    }

    /// Chart labels are whole numbers
    pub fn format_chart_value(&self, value: f64) -> String {
        self.format_number(value, 0, 0)
    }
}

/// Width of a full-height text bar
const BAR_WIDTH: f64 = 20.0;

/// Markdown renderer for a session
pub struct Renderer {
    config: DisplayConfig,
}

impl Renderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Render the selected formula, its inputs and the result if any
    pub fn render(&self, session: &Session) -> String {
        let descriptor = session.descriptor();
        let inputs = session.inputs();
        let mut output = String::new();

        output.push_str(&format!("## {}\n\n", descriptor.title));
        output.push_str(&format!("{}\n\n", descriptor.description));

        output.push_str("| Alan | Değer |\n");
        output.push_str("|------|-------|\n");
        for field in descriptor.inputs {
            let value = inputs
                .get(field.key)
                .map(|v| self.config.format_input(v))
                .unwrap_or_default();
            output.push_str(&format!("| {} | {} |\n", field.label, value));
        }
        output.push('\n');

        let summary = match session.summary() {
            Some(s) => s,
            None => {
                output.push_str(&format!("**{}:** ---\n", descriptor.result_label));
                return output;
            }
        };

        output.push_str(&format!(
            "**{}:** {}\n",
            summary.result_label,
            self.config.format_result(summary.result, summary.unit)
        ));
        if let Some(secondary) = &summary.secondary {
            output.push_str(&format!(
                "\n**{}:** {}\n",
                secondary.label,
                self.config.format_result(secondary.value, summary.unit)
            ));
        }

        if !summary.chart.is_empty() {
            output.push_str("\n### Grafiksel Gösterim\n\n");
            output.push_str("| | Değer | |\n");
            output.push_str("|---|------:|---|\n");
            for bar in summary.chart.bars() {
                // Negative bars can exceed the tallest one; keep the text bar in bounds
                let height = summary.chart.height_percent(bar);
                let width = if height.is_nan() {
                    0
                } else {
                    (height.clamp(MIN_HEIGHT_PERCENT, 100.0) / 100.0 * BAR_WIDTH).round() as usize
                };
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    bar.label,
                    self.config.format_chart_value(bar.value),
                    "█".repeat(width)
                ));
            }
        }

        output
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}
