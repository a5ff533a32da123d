use std::cell::RefCell;

use anyhow::{Result, bail};

use crate::ui::cli::drivers::PromptDriver;

/// One canned reply. `Default` accepts whatever default the prompt offered.
#[derive(Debug, Clone)]
pub enum Answer {
    Select(usize),
    Integer(i64),
    Default,
}

/// What a prompt offered when it was asked, recorded so tests can assert on
/// the synthesized controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskedPrompt {
    Select {
        title: String,
        options: Vec<String>,
        default: usize,
    },
    Integer {
        title: String,
        default: i64,
        min: i64,
        max: i64,
    },
}

/// Prompt backend that replays a fixed script instead of reading a terminal.
pub struct ScriptedDriver {
    answers: RefCell<Vec<Answer>>,
    asked: RefCell<Vec<AskedPrompt>>,
}

impl ScriptedDriver {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: RefCell::new(answers),
            asked: RefCell::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<AskedPrompt> {
        self.asked.borrow().clone()
    }

    fn next_answer(&self) -> Result<Answer> {
        let mut answers = self.answers.borrow_mut();
        if answers.is_empty() {
            bail!("scripted driver ran out of answers");
        }
        Ok(answers.remove(0))
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_select(
        &self,
        title: &str,
        _help: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize> {
        self.asked.borrow_mut().push(AskedPrompt::Select {
            title: title.to_string(),
            options: options.to_vec(),
            default,
        });
        match self.next_answer()? {
            Answer::Select(idx) if idx < options.len() => Ok(idx),
            Answer::Select(idx) => bail!("select answer {idx} out of range for '{title}'"),
            Answer::Default => Ok(default),
            other => bail!("expected a select answer for '{title}', got {other:?}"),
        }
    }

    fn ask_i64(&self, title: &str, _help: &str, default: i64, min: i64, max: i64) -> Result<i64> {
        self.asked.borrow_mut().push(AskedPrompt::Integer {
            title: title.to_string(),
            default,
            min,
            max,
        });
        match self.next_answer()? {
            Answer::Integer(n) if (min..=max).contains(&n) => Ok(n),
            Answer::Integer(n) => bail!("integer answer {n} outside {min}..={max} for '{title}'"),
            Answer::Default => Ok(default),
            other => bail!("expected an integer answer for '{title}', got {other:?}"),
        }
    }
}
