use std::io::{self, Write};

use crate::core::record::InputRecord;

const BAR_WIDTH: usize = 40;

/// Transient result of one prediction pass; lives only for the current
/// rendering cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Highest class probability, as a percentage.
    pub confidence: f64,
    /// `(label, probability)` pairs in class-label order.
    pub probabilities: Vec<(String, f64)>,
}

impl Prediction {
    pub fn new(label: String, class_labels: &[String], probabilities: &[f64]) -> Self {
        let confidence = probabilities.iter().copied().fold(0.0, f64::max) * 100.0;
        let probabilities = class_labels
            .iter()
            .cloned()
            .zip(probabilities.iter().copied())
            .collect();
        Self {
            label,
            confidence,
            probabilities,
        }
    }
}

pub fn format_percent(p: f64) -> String {
    format!("{:.2}%", p * 100.0)
}

fn bar(p: f64) -> String {
    let filled = (p.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}

/// Full prediction report: headline metric, confidence, probability table,
/// bar chart, and a transposed echo of the inputs for user verification.
pub fn write_prediction<W: Write>(
    out: &mut W,
    prediction: &Prediction,
    record: &InputRecord,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Prediction Result")?;
    writeln!(out, "  Predicted Frequency: {}", prediction.label)?;
    writeln!(out, "  Confidence: {:.2}%", prediction.confidence)?;

    let label_width = prediction
        .probabilities
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(out)?;
    writeln!(out, "Prediction Probabilities")?;
    for (label, p) in &prediction.probabilities {
        writeln!(
            out,
            "  {:<w$}  {:>7}  {}",
            label,
            format_percent(*p),
            bar(*p),
            w = label_width
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Input Data Summary")?;
    let name_width = record
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    for (name, value) in record.iter() {
        writeln!(out, "  {:<w$}  {}", name, value, w = name_width)?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "✗ Error: {message}")
}

/// Static help panel: what the classes mean and how to drive the form.
pub fn write_about<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "About This App")?;
    writeln!(out)?;
    writeln!(
        out,
        "Predicts how often a customer purchases, from their shopping behavior."
    )?;
    writeln!(out)?;
    writeln!(out, "Classes:")?;
    writeln!(out, "  Annual     purchases once a year")?;
    writeln!(out, "  Bi-weekly  purchases every two weeks")?;
    writeln!(out, "  Monthly    purchases once a month")?;
    writeln!(out, "  Quarterly  purchases once every three months")?;
    writeln!(out, "  Weekly     purchases once a week")?;
    writeln!(out)?;
    writeln!(out, "How to use:")?;
    writeln!(out, "  1. Enter customer data in the prompts")?;
    writeln!(out, "  2. Run \"Predict purchase frequency\"")?;
    writeln!(out, "  3. Review the prediction and confidence scores")?;
    writeln!(out)?;
    Ok(())
}
