//! Questions the pipeline asks, and the front ends that answer them
//!
//! Questions are plain data. A [`Frontend`] answers them synchronously:
//! the cliclack terminal UI in `tui`, or [`ScriptedFrontend`] in tests.
//! Every answer method returns `Ok(None)` when the user cancels.

use crate::error::{Result, ScaffoldError};
use crate::input::{ScaffoldRequest, SubProject};
use crate::pipeline::MaterializationResult;
use crate::runtime::{InstallOutcome, PackageManager};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Free-text question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuestion {
    pub message: String,
    pub default: Option<String>,
}

/// One entry of a single-choice menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub hint: String,
}

/// Single-choice menu; `default` indexes into `choices`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuestion {
    pub message: String,
    pub choices: Vec<Choice>,
    pub default: usize,
}

/// Yes/no question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmQuestion {
    pub message: String,
    pub default: bool,
}

/// Progress notifications emitted while the pipeline runs
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    Resolved(ScaffoldRequest),
    CompatibilityWarning(String),
    TargetPrepared { path: PathBuf, cleared: bool },
    MaterializeStarted(SubProject),
    SubProjectReady(MaterializationResult),
    SubProjectFailed { sub_project: SubProject, message: String },
    SummaryWritten(PathBuf),
    InstallStarted {
        package_manager: PackageManager,
        destination: PathBuf,
    },
    InstallFinished(InstallOutcome),
    InstallSkipped(String),
}

/// Anything that can answer pipeline questions
pub trait Frontend {
    fn text(&mut self, question: &TextQuestion) -> Result<Option<String>>;

    /// Returns the `value` of the chosen [`Choice`]
    fn select(&mut self, question: &SelectQuestion) -> Result<Option<String>>;

    fn confirm(&mut self, question: &ConfirmQuestion) -> Result<Option<bool>>;

    fn event(&mut self, _event: PipelineEvent) {}
}

/// A pre-recorded answer for [`ScriptedFrontend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Select(String),
    Confirm(bool),
    Cancel,
}

/// Answers questions from a queue and records everything it sees.
///
/// Running out of answers counts as cancellation.
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
    pub events: Vec<PipelineEvent>,
}

impl ScriptedFrontend {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    fn next(&mut self, message: &str) -> Option<Answer> {
        self.asked.push(message.to_string());
        self.answers.pop_front()
    }

    fn mismatch(message: &str, answer: &Answer) -> ScaffoldError {
        ScaffoldError::Unknown(anyhow::anyhow!(
            "scripted answer {:?} does not fit question '{}'",
            answer,
            message
        ))
    }
}

impl Frontend for ScriptedFrontend {
    fn text(&mut self, question: &TextQuestion) -> Result<Option<String>> {
        match self.next(&question.message) {
            Some(Answer::Text(value)) => Ok(Some(value)),
            Some(Answer::Cancel) | None => Ok(None),
            Some(other) => Err(Self::mismatch(&question.message, &other)),
        }
    }

    fn select(&mut self, question: &SelectQuestion) -> Result<Option<String>> {
        match self.next(&question.message) {
            Some(Answer::Select(value)) => Ok(Some(value)),
            Some(Answer::Cancel) | None => Ok(None),
            Some(other) => Err(Self::mismatch(&question.message, &other)),
        }
    }

    fn confirm(&mut self, question: &ConfirmQuestion) -> Result<Option<bool>> {
        match self.next(&question.message) {
            Some(Answer::Confirm(value)) => Ok(Some(value)),
            Some(Answer::Cancel) | None => Ok(None),
            Some(other) => Err(Self::mismatch(&question.message, &other)),
        }
    }

    fn event(&mut self, event: PipelineEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm_question() -> ConfirmQuestion {
        ConfirmQuestion {
            message: "Overwrite?".to_string(),
            default: false,
        }
    }

    #[test]
    fn test_answers_are_consumed_in_order() {
        let mut frontend = ScriptedFrontend::new([Answer::Confirm(true), Answer::Confirm(false)]);
        assert_eq!(frontend.confirm(&confirm_question()).unwrap(), Some(true));
        assert_eq!(frontend.confirm(&confirm_question()).unwrap(), Some(false));
        assert_eq!(frontend.asked, vec!["Overwrite?", "Overwrite?"]);
    }

    #[test]
    fn test_exhausted_queue_cancels() {
        let mut frontend = ScriptedFrontend::default();
        assert_eq!(frontend.confirm(&confirm_question()).unwrap(), None);
    }

    #[test]
    fn test_mismatched_answer_is_an_error() {
        let mut frontend = ScriptedFrontend::new([Answer::Text("demo".to_string())]);
        assert!(frontend.confirm(&confirm_question()).is_err());
    }
}
