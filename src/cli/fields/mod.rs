//! Per-step field components for the interactive wizards, plus the review
//! summary each flow prints on its last step.

pub mod brand_deal;
pub mod discount;

use std::fmt;

use chrono::NaiveDate;
use deals_core::WizardFlow;
use deals_domain::Patchable;

use crate::cli::output;
use crate::cli::prompter::FieldPrompter;
use crate::errors::CliError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const NOT_SET: &str = "(not set)";
const LIST_SEPARATOR: char = ';';

/// A [`WizardFlow`] the terminal front end knows how to prompt for.
pub trait InteractiveFlow: WizardFlow {
    /// Heading printed above every step.
    const HEADING: &'static str;

    /// Prompts for the fields of `step`, pre-filled from `state`, and
    /// returns the patch to merge. The last step prompts for nothing.
    fn prompt_step(
        step: Self::Step,
        state: &Self::State,
        prompter: &mut dyn FieldPrompter,
    ) -> Result<<Self::State as Patchable>::Patch, CliError>;

    fn review_lines(state: &Self::State) -> Vec<String>;
}

/// Select over fixed labels with a leading "(not set)" entry, which maps back
/// to an empty string so an untouched select never fills a required field.
pub(crate) fn choose_from(
    prompter: &mut dyn FieldPrompter,
    prompt: &str,
    options: &[&str],
    current: &str,
) -> Result<String, CliError> {
    let mut items = vec![NOT_SET.to_string()];
    items.extend(options.iter().map(|option| option.to_string()));
    let default = options
        .iter()
        .position(|option| *option == current)
        .map_or(0, |index| index + 1);
    let index = prompter.select(prompt, &items, default)?;
    Ok(index
        .checked_sub(1)
        .and_then(|index| options.get(index))
        .map(|option| option.to_string())
        .unwrap_or_default())
}

/// Select over `options` with a leading "(not set)" entry.
pub(crate) fn choose_optional<T>(
    prompter: &mut dyn FieldPrompter,
    prompt: &str,
    options: &[T],
    current: Option<T>,
) -> Result<Option<T>, CliError>
where
    T: Copy + PartialEq + fmt::Display,
{
    let mut items = vec![NOT_SET.to_string()];
    items.extend(options.iter().map(ToString::to_string));
    let default = current
        .and_then(|value| options.iter().position(|option| *option == value))
        .map_or(0, |index| index + 1);
    let index = prompter.select(prompt, &items, default)?;
    Ok(index.checked_sub(1).and_then(|index| options.get(index).copied()))
}

pub(crate) fn choose_required<T>(
    prompter: &mut dyn FieldPrompter,
    prompt: &str,
    options: &[T],
    current: T,
) -> Result<T, CliError>
where
    T: Copy + PartialEq + fmt::Display,
{
    let items: Vec<String> = options.iter().map(ToString::to_string).collect();
    let default = options
        .iter()
        .position(|option| *option == current)
        .unwrap_or(0);
    let index = prompter.select(prompt, &items, default)?;
    Ok(options.get(index).copied().unwrap_or(current))
}

/// Blank input clears the date; anything unparsable is asked again.
pub(crate) fn prompt_date(
    prompter: &mut dyn FieldPrompter,
    prompt: &str,
    current: Option<NaiveDate>,
) -> Result<Option<NaiveDate>, CliError> {
    let initial = current
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    let prompt = format!("{prompt} (YYYY-MM-DD)");
    loop {
        let raw = prompter.text(&prompt, &initial)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => return Ok(Some(date)),
            Err(_) => output::warning(format!("`{raw}` is not a date like 2030-06-01")),
        }
    }
}

pub(crate) fn prompt_count(
    prompter: &mut dyn FieldPrompter,
    prompt: &str,
    current: u32,
) -> Result<u32, CliError> {
    let initial = current.to_string();
    loop {
        let raw = prompter.text(prompt, &initial)?;
        match raw.trim().parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => output::warning(format!("`{}` is not a whole number", raw.trim())),
        }
    }
}

pub(crate) fn prompt_amount(
    prompter: &mut dyn FieldPrompter,
    prompt: &str,
    current: Option<f64>,
) -> Result<Option<f64>, CliError> {
    let initial = current.map(|value| value.to_string()).unwrap_or_default();
    loop {
        let raw = prompter.text(prompt, &initial)?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => return Ok(Some(value)),
            _ => output::warning(format!("`{raw}` is not a valid amount")),
        }
    }
}

/// Multi-line values are entered on one line separated by `;`.
pub(crate) fn prompt_lines(
    prompter: &mut dyn FieldPrompter,
    prompt: &str,
    current: &str,
) -> Result<String, CliError> {
    let initial = current
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    let raw = prompter.text(&format!("{prompt} (separate with ';')"), &initial)?;
    Ok(raw
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

pub(crate) fn summary_line(label: &str, value: impl fmt::Display) -> String {
    let value = value.to_string();
    if value.trim().is_empty() {
        format!("{label:<22}: {NOT_SET}")
    } else {
        format!("{label:<22}: {value}")
    }
}

pub(crate) fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub(crate) fn display_option<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}
