use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Result, anyhow};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Prompt driver that replays canned answers in order.
///
/// Numeric answers are checked against the prompt bounds, mirroring the
/// validation the interactive driver performs.
#[derive(Default)]
pub struct ScriptedDriver {
    numbers: RefCell<VecDeque<f64>>,
    confirmations: RefCell<VecDeque<bool>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedDriver {
    pub fn new(numbers: Vec<f64>, confirmations: Vec<bool>) -> Self {
        Self {
            numbers: RefCell::new(numbers.into()),
            confirmations: RefCell::new(confirmations.into()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl PromptDriver for ScriptedDriver {
    fn ask_bool(&self, title: &str, _help: &str, _default: bool) -> Result<bool> {
        self.asked.borrow_mut().push(title.to_string());
        self.confirmations
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted confirmation left for {title:?}"))
    }

    fn ask_f64(
        &self,
        title: &str,
        _help: &str,
        _default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        self.asked.borrow_mut().push(title.to_string());
        let x = self
            .numbers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted number left for {title:?}"))?;
        if min.is_some_and(|lo| x < lo) || max.is_some_and(|hi| x > hi) {
            return Err(anyhow!("scripted answer {x} out of bounds for {title:?}"));
        }
        Ok(x)
    }
}
