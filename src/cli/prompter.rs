//! Field-level prompting behind a trait so step components can be driven by
//! a script in tests.

use std::collections::VecDeque;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::errors::CliError;

pub trait FieldPrompter {
    /// Free text, pre-filled with `initial`. Empty input is allowed.
    fn text(&mut self, prompt: &str, initial: &str) -> Result<String, CliError>;

    /// Index into `items`.
    fn select(&mut self, prompt: &str, items: &[String], default: usize)
        -> Result<usize, CliError>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError>;
}

pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldPrompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str, initial: &str) -> Result<String, CliError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()
            .map_err(CliError::from)
    }

    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, CliError> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default.min(items.len().saturating_sub(1)))
            .interact()
            .map_err(CliError::from)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(CliError::from)
    }
}

/// One pre-recorded answer for [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Text(String),
    /// Accept whatever the prompt offers as its current value.
    Keep,
    /// Pick the item whose label matches exactly.
    Choose(String),
    Confirm(bool),
}

/// Replays answers in order. Running out of answers is an error so a broken
/// script cannot loop forever.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<ScriptedAnswer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts seen so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<ScriptedAnswer, CliError> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| CliError::ScriptExhausted(prompt.to_string()))
    }
}

impl FieldPrompter for ScriptedPrompter {
    fn text(&mut self, prompt: &str, initial: &str) -> Result<String, CliError> {
        match self.next(prompt)? {
            ScriptedAnswer::Text(value) => Ok(value),
            _ => Ok(initial.to_string()),
        }
    }

    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, CliError> {
        match self.next(prompt)? {
            ScriptedAnswer::Choose(label) => Ok(items
                .iter()
                .position(|item| *item == label)
                .unwrap_or(default)),
            _ => Ok(default),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool, CliError> {
        match self.next(prompt)? {
            ScriptedAnswer::Confirm(value) => Ok(value),
            _ => Ok(default),
        }
    }
}
