use anyhow::Result;

/// Seam between the wizard and the concrete prompt backend, so the form flow
/// can be driven by a scripted stub in tests.
pub trait PromptDriver {
    /// Pick one of `options`; returns the chosen index. The cursor starts on
    /// `default`.
    fn ask_select(&self, title: &str, help: &str, options: &[String], default: usize)
    -> Result<usize>;

    /// Integer constrained to `min..=max`. A zero-width range still prompts,
    /// with `min == max` as the only accepted answer.
    fn ask_i64(&self, title: &str, help: &str, default: i64, min: i64, max: i64) -> Result<i64>;
}
