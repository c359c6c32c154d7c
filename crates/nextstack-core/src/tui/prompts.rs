//! Charm-style CLI prompts using cliclack

use crate::config::{locate_template_store, Environment};
use crate::error::{Result, ScaffoldError};
use crate::frontend::{ConfirmQuestion, Frontend, PipelineEvent, SelectQuestion, TextQuestion};
use crate::input::{CreateArgs, TemplateKind};
use crate::pipeline::{InstallStep, Pipeline, RunReport, SkipReason};
use crate::product::ProductConfig;
use crate::templates::TemplateRegistry;
use std::io::{self, IsTerminal};

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(
    config: &C,
    args: CreateArgs,
    cli_version: &str,
    env: &Environment,
) -> Result<RunReport> {
    // Reject a bad --template before touching anything, the store included
    if let Some(template) = args.template.as_deref() {
        template.parse::<TemplateKind>()?;
    }

    ui(cliclack::intro(config.display_name()))?;

    let store = locate_template_store(config, args.template_dir.as_deref(), env);
    tracing::debug!(product = config.name(), store = %store.display(), "using template store");
    let registry = TemplateRegistry::load(&store)?;

    let cwd = std::env::current_dir().map_err(|e| ScaffoldError::fs("read", ".", e))?;
    let mut pipeline = Pipeline::new(&registry, env, cwd);
    pipeline.cli_version = cli_version.to_string();
    pipeline.upgrade_command = config.upgrade_command().to_string();

    let mut frontend = TerminalFrontend::new();
    let report = pipeline.run(&args, &mut frontend).await;
    frontend.finish_spinner();

    let report = report?;
    print_report(config, env, &report)?;
    Ok(report)
}

/// Answers questions on the terminal and renders pipeline progress
pub struct TerminalFrontend {
    attended: bool,
    spinner: Option<cliclack::ProgressBar>,
}

impl Default for TerminalFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalFrontend {
    pub fn new() -> Self {
        Self {
            attended: io::stdin().is_terminal(),
            spinner: None,
        }
    }

    fn start_spinner(&mut self, message: String) {
        self.finish_spinner();
        let spinner = cliclack::spinner();
        spinner.start(message);
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self, message: String) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(message);
        }
    }

    fn finish_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop("");
        }
    }

    /// No terminal means no answer
    fn unattended(&self, message: &str) -> bool {
        if !self.attended {
            tracing::debug!(question = message, "stdin is not a terminal, treating as cancelled");
        }
        !self.attended
    }
}

impl Frontend for TerminalFrontend {
    fn text(&mut self, question: &TextQuestion) -> Result<Option<String>> {
        if self.unattended(&question.message) {
            return Ok(None);
        }
        let mut input = cliclack::input(&question.message);
        if let Some(default) = &question.default {
            input = input.placeholder(default).default_input(default);
        }
        answer(input.interact::<String>())
    }

    fn select(&mut self, question: &SelectQuestion) -> Result<Option<String>> {
        if self.unattended(&question.message) {
            return Ok(None);
        }
        let mut select = cliclack::select(&question.message);
        for choice in &question.choices {
            select = select.item(choice.value.clone(), &choice.label, &choice.hint);
        }
        if let Some(default) = question.choices.get(question.default) {
            select = select.initial_value(default.value.clone());
        }
        answer(select.interact())
    }

    fn confirm(&mut self, question: &ConfirmQuestion) -> Result<Option<bool>> {
        if self.unattended(&question.message) {
            return Ok(None);
        }
        answer(
            cliclack::confirm(&question.message)
                .initial_value(question.default)
                .interact(),
        )
    }

    fn event(&mut self, event: PipelineEvent) {
        // Rendering failures are cosmetic; the pipeline keeps going
        let _ = self.render(event);
    }
}

impl TerminalFrontend {
    fn render(&mut self, event: PipelineEvent) -> io::Result<()> {
        match event {
            PipelineEvent::Resolved(request) => cliclack::log::info(format!(
                "Creating a new {} project in {}",
                request.template_kind(),
                request.target_path().display()
            )),
            PipelineEvent::CompatibilityWarning(warning) => cliclack::log::warning(format!(
                "Version warning: {}",
                warning.lines().next().unwrap_or(&warning)
            )),
            PipelineEvent::TargetPrepared { path, cleared } => {
                if cleared {
                    cliclack::log::info(format!("Cleared {}", path.display()))?;
                }
                Ok(())
            }
            PipelineEvent::MaterializeStarted(sub_project) => {
                self.start_spinner(format!("Scaffolding {}...", sub_project.template));
                Ok(())
            }
            PipelineEvent::SubProjectReady(result) => {
                self.stop_spinner(format!(
                    "Created {} files in {}",
                    result.files_copied,
                    result.destination.display()
                ));
                Ok(())
            }
            PipelineEvent::SubProjectFailed {
                sub_project,
                message,
            } => {
                self.stop_spinner(format!("Error scaffolding {}", sub_project.template));
                cliclack::log::error(message)
            }
            PipelineEvent::SummaryWritten(path) => {
                cliclack::log::info(format!("Wrote {}", path.display()))
            }
            PipelineEvent::InstallStarted {
                package_manager,
                destination,
            } => {
                self.start_spinner(format!(
                    "Installing dependencies with {} in {}...",
                    package_manager,
                    destination.display()
                ));
                Ok(())
            }
            PipelineEvent::InstallFinished(outcome) => {
                if outcome.succeeded {
                    self.stop_spinner(format!(
                        "Installed dependencies in {}",
                        outcome.destination.display()
                    ));
                    Ok(())
                } else {
                    self.stop_spinner(format!(
                        "Failed to install dependencies in {}",
                        outcome.destination.display()
                    ));
                    cliclack::log::error(outcome.error_message.unwrap_or_default())
                }
            }
            PipelineEvent::InstallSkipped(reason) => {
                cliclack::log::info(format!("Skipping dependency installation ({})", reason))
            }
        }
    }
}

fn print_report<C: ProductConfig>(config: &C, env: &Environment, report: &RunReport) -> Result<()> {
    let root = report.request.target_path();
    ui(cliclack::log::success(format!(
        "Success! Created project at {}",
        root.display()
    )))?;

    let failed = report.failed_installs();
    if !failed.is_empty() {
        ui(cliclack::log::warning(
            "Some dependencies could not be installed. Run these commands to finish setup:",
        ))?;
        for outcome in failed {
            ui(cliclack::log::info(outcome.manual_command()))?;
        }
    }

    if report.install == InstallStep::Skipped(SkipReason::Declined) {
        ui(cliclack::log::info("Skipped dependency installation."))?;
    }

    let steps = config.next_steps(
        root,
        report.request.template_kind(),
        report.package_manager(env),
        report.fully_installed(),
    );

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    ui(cliclack::outro("Happy coding!"))?;

    Ok(())
}

/// Esc and Ctrl-C inside a prompt surface as `Interrupted`
fn answer<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(ScaffoldError::Unknown(e.into())),
    }
}

fn ui<T>(result: io::Result<T>) -> Result<T> {
    result.map_err(|e| ScaffoldError::Unknown(e.into()))
}
