use anyhow::Result;
use inquire::{CustomType, Select, validator::Validation};

use crate::ui::cli::drivers::PromptDriver;

pub struct InquireDriver;

impl PromptDriver for InquireDriver {
    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        let picked = Select::new(title, options.to_vec())
            .with_starting_cursor(default)
            .with_help_message(help)
            .raw_prompt()?;
        Ok(picked.index)
    }

    fn ask_i64(&self, title: &str, help: &str, default: i64, min: i64, max: i64) -> Result<i64> {
        let q = CustomType::<i64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &i64| {
                if (min..=max).contains(x) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(
                        format!("Must be between {min} and {max}").into(),
                    ))
                }
            });
        Ok(q.prompt()?)
    }
}
