//! create-nextjs-stack - Scaffold Next.js web and Supabase admin projects

mod logging;

use clap::{ArgAction, Parser};
use colored::Colorize;
use nextstack_core::runtime::PackageManager;
use nextstack_core::{CreateArgs, Environment, ProductConfig, ScaffoldError, TemplateKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product configuration for create-nextjs-stack
#[derive(Clone)]
pub struct NextStackConfig;

impl ProductConfig for NextStackConfig {
    fn name(&self) -> &'static str {
        "create-nextjs-stack"
    }

    fn display_name(&self) -> &'static str {
        "create-nextjs-stack"
    }

    fn template_dir_env(&self) -> &'static str {
        "CREATE_NEXTJS_STACK_TEMPLATES"
    }

    fn default_template_dir(&self) -> &'static str {
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates")
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install create-nextjs-stack --force"
    }

    fn next_steps(
        &self,
        dir: &Path,
        kind: TemplateKind,
        package_manager: PackageManager,
        installed: bool,
    ) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to the project if it is not the current directory
        if current.as_deref() != Some(dir) {
            let shown = current
                .as_deref()
                .and_then(|cwd| dir.strip_prefix(cwd).ok())
                .unwrap_or(dir);
            steps.push(format!("cd {}", shown.display()));
        }

        // Step 2: full-stack projects are run per sub-project
        if kind == TemplateKind::FullStack {
            steps.push("cd web  (or: cd admin)".to_string());
        }

        // Step 3: install dependencies if that did not happen
        if !installed {
            steps.push(package_manager.install_hint());
        }

        // Step 4: start dev server
        steps.push(package_manager.run_script("dev"));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-nextjs-stack")]
#[command(about = "Scaffold a new Next.js Project with Supabase Admin support")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Directory to create the project in
    #[arg(value_name = "project-directory")]
    pub project_directory: Option<PathBuf>,

    /// Template type: web, admin, or full-stack
    #[arg(short, long, value_name = "type")]
    pub template: Option<String>,

    /// Local directory to use for templates instead of the bundled ones
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts (overwrite and install)
    #[arg(short, long)]
    pub yes: bool,

    /// Do not install dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Show debug logs and full error details
    #[arg(long)]
    pub verbose: bool,

    /// Output the current version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            directory: args.project_directory,
            template: args.template,
            template_dir: args.template_dir,
            yes: args.yes,
            skip_install: args.skip_install,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C stops immediately; partially written files stay as they are
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let verbose = args.verbose;

    if let Err(e) = logging::init_logging(verbose) {
        eprintln!("{} {}", "Warning:".yellow(), e);
    }

    let config = NextStackConfig;
    let env = Environment::from_process(&config);
    tracing::debug!(?env, "environment captured");
    let result = nextstack_core::run(&config, args.into(), CLI_VERSION, &env).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(err) => {
            report_error(&err, verbose);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report_error(err: &ScaffoldError, verbose: bool) {
    if err.is_cancellation() {
        eprintln!("{}", err.to_string().red());
        return;
    }

    match err {
        ScaffoldError::Unknown(inner) if verbose => {
            eprintln!("{} {:?}", "Error:".red().bold(), inner)
        }
        ScaffoldError::Unknown(_) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            eprintln!("{}", "Re-run with --verbose for details.".dimmed());
        }
        other if verbose => eprintln!("{} {:?}", "Error:".red().bold(), other),
        other => eprintln!("{} {}", "Error:".red().bold(), other),
    }
}
