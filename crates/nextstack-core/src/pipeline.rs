//! Scaffold orchestration
//!
//! A run moves through `resolve → prepare → (materialize → rewrite) per
//! sub-project → [offer install → install per sub-project] → report`.
//! Sub-projects are handled one at a time in [`TemplateKind::sub_projects`]
//! order. A copy or rewrite failure ends the run with an error; install
//! failures only show up in the [`RunReport`].

use crate::config::Environment;
use crate::error::{Result, ScaffoldError};
use crate::frontend::{Choice, ConfirmQuestion, Frontend, PipelineEvent, SelectQuestion};
use crate::input::{
    prepare_target, resolve_request, CreateArgs, ScaffoldRequest, SubProject, TemplateName,
};
use crate::runtime::{
    available_package_managers, check_package_manager, install_choices, InstallOutcome, Installer,
    PackageManager,
};
use crate::templates::{check_compatibility, copy_template, rewrite_project, TemplateRegistry};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level file written next to the sub-projects in full-stack mode
pub const SUMMARY_FILE: &str = "README.md";

/// One materialized and rewritten sub-project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializationResult {
    pub template: TemplateName,
    pub destination: PathBuf,
    pub files_copied: usize,
    pub env_file_created: bool,
    pub manifest_rewritten: bool,
}

/// Why installation did not run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// `--skip-install`
    Flag,
    /// Test marker set in the environment
    NonInteractive,
    /// The user said no or cancelled the prompt
    Declined,
}

/// What happened in the install phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallStep {
    Skipped(SkipReason),
    Attempted {
        package_manager: PackageManager,
        outcomes: Vec<InstallOutcome>,
    },
}

/// Everything a successful run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub request: ScaffoldRequest,
    pub cleared_existing: bool,
    pub sub_projects: Vec<MaterializationResult>,
    pub summary_file: Option<PathBuf>,
    pub install: InstallStep,
}

impl RunReport {
    /// Install failures never change the exit code
    pub fn exit_code(&self) -> u8 {
        0
    }

    pub fn failed_installs(&self) -> Vec<&InstallOutcome> {
        match &self.install {
            InstallStep::Attempted { outcomes, .. } => {
                outcomes.iter().filter(|o| !o.succeeded).collect()
            }
            InstallStep::Skipped(_) => Vec::new(),
        }
    }

    /// Whether every sub-project has its dependencies installed
    pub fn fully_installed(&self) -> bool {
        match &self.install {
            InstallStep::Attempted { outcomes, .. } => outcomes.iter().all(|o| o.succeeded),
            InstallStep::Skipped(_) => false,
        }
    }

    /// Manager to mention in next steps
    pub fn package_manager(&self, env: &Environment) -> PackageManager {
        match &self.install {
            InstallStep::Attempted {
                package_manager, ..
            } => *package_manager,
            InstallStep::Skipped(_) => PackageManager::detect(env.user_agent.as_deref()),
        }
    }
}

/// Collaborators injected into a run
pub struct Pipeline<'a> {
    pub registry: &'a TemplateRegistry,
    pub env: &'a Environment,
    pub cwd: PathBuf,
    pub cli_version: String,
    pub upgrade_command: String,
    pub installer: Installer,
    /// Availability probe for package managers
    pub probe: fn(PackageManager) -> bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(registry: &'a TemplateRegistry, env: &'a Environment, cwd: PathBuf) -> Self {
        Self {
            registry,
            env,
            cwd,
            cli_version: crate::DEFAULT_CLI_VERSION.to_string(),
            upgrade_command: String::new(),
            installer: Installer::new(),
            probe: |pm| check_package_manager(pm).available,
        }
    }

    /// Run every phase and return the report, or the error that stopped the run
    pub async fn run<F: Frontend>(&self, args: &CreateArgs, frontend: &mut F) -> Result<RunReport> {
        let request = resolve_request(args, frontend, &self.cwd, self.registry)?;
        frontend.event(PipelineEvent::Resolved(request.clone()));

        if let Some(warning) = check_compatibility(
            &self.cli_version,
            self.registry.version(),
            &self.upgrade_command,
        ) {
            frontend.event(PipelineEvent::CompatibilityWarning(warning));
        }

        let (cleared_existing, sub_projects, summary_file) = self.materialize(&request, frontend)?;
        let install = self.install(args, &sub_projects, frontend).await?;

        Ok(RunReport {
            request,
            cleared_existing,
            sub_projects,
            summary_file,
            install,
        })
    }

    /// Prepare the target, then copy and rewrite each sub-project in order
    pub fn materialize<F: Frontend>(
        &self,
        request: &ScaffoldRequest,
        frontend: &mut F,
    ) -> Result<(bool, Vec<MaterializationResult>, Option<PathBuf>)> {
        let cleared = prepare_target(request)?;
        frontend.event(PipelineEvent::TargetPrepared {
            path: request.target_path().to_path_buf(),
            cleared,
        });

        let mut results = Vec::new();
        for sub_project in request.sub_projects() {
            frontend.event(PipelineEvent::MaterializeStarted(sub_project.clone()));
            match self.materialize_one(&sub_project) {
                Ok(result) => {
                    frontend.event(PipelineEvent::SubProjectReady(result.clone()));
                    results.push(result);
                }
                Err(err) => {
                    frontend.event(PipelineEvent::SubProjectFailed {
                        sub_project,
                        message: err.to_string(),
                    });
                    return Err(err);
                }
            }
        }

        let summary = if results.len() > 1 {
            let path = write_summary(request.target_path(), request.app_name(), &results)?;
            frontend.event(PipelineEvent::SummaryWritten(path.clone()));
            Some(path)
        } else {
            None
        };

        Ok((cleared, results, summary))
    }

    fn materialize_one(&self, sub_project: &SubProject) -> Result<MaterializationResult> {
        let descriptor = self.registry.get(sub_project.template);
        let files_copied = copy_template(descriptor, &sub_project.destination)?;
        let rewrite = rewrite_project(&sub_project.destination)?;

        Ok(MaterializationResult {
            template: sub_project.template,
            destination: sub_project.destination.clone(),
            files_copied,
            env_file_created: rewrite.env_file_created,
            manifest_rewritten: rewrite.manifest_rewritten,
        })
    }

    /// Offer and run the install step. Only question errors propagate.
    async fn install<F: Frontend>(
        &self,
        args: &CreateArgs,
        sub_projects: &[MaterializationResult],
        frontend: &mut F,
    ) -> Result<InstallStep> {
        if args.skip_install {
            frontend.event(PipelineEvent::InstallSkipped("--skip-install".to_string()));
            return Ok(InstallStep::Skipped(SkipReason::Flag));
        }
        if self.env.is_non_interactive() {
            frontend.event(PipelineEvent::InstallSkipped(
                "non-interactive environment".to_string(),
            ));
            return Ok(InstallStep::Skipped(SkipReason::NonInteractive));
        }

        let Some(package_manager) = self.choose_package_manager(args, frontend).await? else {
            frontend.event(PipelineEvent::InstallSkipped("declined".to_string()));
            return Ok(InstallStep::Skipped(SkipReason::Declined));
        };

        let mut outcomes = Vec::new();
        for result in sub_projects {
            frontend.event(PipelineEvent::InstallStarted {
                package_manager,
                destination: result.destination.clone(),
            });
            let outcome = self
                .installer
                .install(package_manager, &result.destination)
                .await;
            if !outcome.succeeded {
                tracing::debug!(
                    destination = %outcome.destination.display(),
                    error = outcome.error_message.as_deref().unwrap_or(""),
                    "install failed"
                );
            }
            frontend.event(PipelineEvent::InstallFinished(outcome.clone()));
            outcomes.push(outcome);
        }

        Ok(InstallStep::Attempted {
            package_manager,
            outcomes,
        })
    }

    async fn choose_package_manager<F: Frontend>(
        &self,
        args: &CreateArgs,
        frontend: &mut F,
    ) -> Result<Option<PackageManager>> {
        if !args.yes && frontend.confirm(&install_question())? != Some(true) {
            return Ok(None);
        }

        let detected = PackageManager::detect(self.env.user_agent.as_deref());
        let available = self.available_package_managers().await?;
        let (choices, default) = install_choices(&available, detected);

        if args.yes {
            return Ok(Some(choices[default]));
        }

        if choices.len() == 1 {
            return Ok(Some(choices[0]));
        }

        let answer = frontend.select(&package_manager_question(&choices, default))?;
        Ok(answer.as_deref().and_then(PackageManager::from_name))
    }

    /// Probes spawn `<pm> --version` synchronously, so they run on the blocking pool
    async fn available_package_managers(&self) -> Result<Vec<PackageManager>> {
        let probe = self.probe;
        tokio::task::spawn_blocking(move || available_package_managers(probe))
            .await
            .map_err(|e| ScaffoldError::Unknown(e.into()))
    }
}

fn write_summary(root: &Path, app_name: &str, results: &[MaterializationResult]) -> Result<PathBuf> {
    let path = root.join(SUMMARY_FILE);
    let names: Vec<&str> = results.iter().map(|r| r.template.display_name()).collect();

    let mut content = format!(
        "# {}\n\nThis project contains both {} applications.\n\n",
        app_name,
        names.join(" and ")
    );
    for result in results {
        content.push_str(&format!(
            "- [{}](./{})\n",
            result.template.display_name(),
            result.template.as_str()
        ));
    }

    fs::write(&path, content).map_err(|e| ScaffoldError::fs("write", &path, e))?;
    Ok(path)
}

pub fn install_question() -> ConfirmQuestion {
    ConfirmQuestion {
        message: "Install dependencies now?".to_string(),
        default: true,
    }
}

pub fn package_manager_question(choices: &[PackageManager], default: usize) -> SelectQuestion {
    SelectQuestion {
        message: "Which package manager would you like to use?".to_string(),
        choices: choices
            .iter()
            .map(|pm| Choice {
                value: pm.name().to_string(),
                label: pm.name().to_string(),
                hint: pm.install_hint(),
            })
            .collect(),
        default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{Answer, ScriptedFrontend};
    use crate::input::TemplateKind;
    use crate::runtime::InstallCommand;
    use crate::templates::rewrite::{ENV_FILE, ENV_TEMPLATE, MANIFEST_FILE};
    use crate::testing::template_store;
    use serde_json::Value;
    use std::sync::Mutex;
    use std::thread::{self, ThreadId};
    use tempfile::TempDir;
    use walkdir::WalkDir;

    fn test_env() -> Environment {
        Environment {
            test_mode: true,
            ..Environment::default()
        }
    }

    fn args(directory: &str, template: &str) -> CreateArgs {
        CreateArgs {
            directory: Some(PathBuf::from(directory)),
            template: Some(template.to_string()),
            ..CreateArgs::default()
        }
    }

    fn manifest_name(dir: &Path) -> String {
        let value: Value =
            serde_json::from_str(&fs::read_to_string(dir.join(MANIFEST_FILE)).unwrap()).unwrap();
        value["name"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_admin_scaffold() {
        let store = template_store();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = test_env();
        let pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());
        let mut frontend = ScriptedFrontend::default();

        let report = pipeline.run(&args("demo", "admin"), &mut frontend).await.unwrap();

        let demo = work.path().join("demo");
        assert_eq!(report.exit_code(), 0);
        assert_eq!(manifest_name(&demo), "demo");
        assert_eq!(
            fs::read(demo.join(ENV_FILE)).unwrap(),
            fs::read(demo.join(ENV_TEMPLATE)).unwrap()
        );
        assert!(!demo.join("node_modules").exists());
        assert!(demo.join("middleware.ts").exists());
        assert_eq!(report.sub_projects.len(), 1);
        assert!(report.sub_projects[0].env_file_created);
        assert!(report.sub_projects[0].manifest_rewritten);
        assert!(report.summary_file.is_none());
        assert_eq!(report.install, InstallStep::Skipped(SkipReason::NonInteractive));
        assert!(frontend.asked.is_empty());
    }

    #[tokio::test]
    async fn test_full_stack_scaffold() {
        let store = template_store();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = test_env();
        let pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());
        let mut frontend = ScriptedFrontend::default();

        let report = pipeline
            .run(&args("fs", "full-stack"), &mut frontend)
            .await
            .unwrap();

        let root = work.path().join("fs");
        assert_eq!(manifest_name(&root.join("web")), "web");
        assert_eq!(manifest_name(&root.join("admin")), "admin");

        let readme = fs::read_to_string(root.join(SUMMARY_FILE)).unwrap();
        assert!(readme.contains("fs"));
        assert!(readme.contains("./web"));
        assert!(readme.contains("./admin"));

        let mut top: Vec<String> = fs::read_dir(&root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        top.sort();
        assert_eq!(top, vec!["README.md", "admin", "web"]);

        let templates: Vec<TemplateName> = report.sub_projects.iter().map(|r| r.template).collect();
        assert_eq!(templates, vec![TemplateName::Web, TemplateName::Admin]);
    }

    #[tokio::test]
    async fn test_no_excluded_names_in_output() {
        let store = template_store();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = test_env();
        let pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());

        pipeline
            .run(&args("out", "full-stack"), &mut ScriptedFrontend::default())
            .await
            .unwrap();

        let web_rules = &registry.get(TemplateName::Web).exclusion_rules;
        for entry in WalkDir::new(work.path().join("out")).min_depth(1) {
            let entry = entry.unwrap();
            // .env is generated after the copy, so only check it is not a stale copy
            if entry.file_name() == ENV_FILE {
                let dir = entry.path().parent().unwrap();
                assert_eq!(
                    fs::read(entry.path()).unwrap(),
                    fs::read(dir.join(ENV_TEMPLATE)).unwrap()
                );
                continue;
            }
            assert!(
                !web_rules.is_excluded(entry.file_name()),
                "{}",
                entry.path().display()
            );
        }
    }

    #[tokio::test]
    async fn test_invalid_template_writes_nothing() {
        let store = template_store();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = test_env();
        let pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());

        let err = pipeline
            .run(&args("demo2", "bogus"), &mut ScriptedFrontend::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::InvalidArgument { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(!work.path().join("demo2").exists());
    }

    #[tokio::test]
    async fn test_overwrite_declined_and_confirmed() {
        let store = template_store();
        let work = TempDir::new().unwrap();
        let target = work.path().join("existing");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("old.txt"), "old").unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = test_env();
        let pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());

        let mut declining = ScriptedFrontend::new([Answer::Confirm(false)]);
        let err = pipeline
            .run(&args("existing", "web"), &mut declining)
            .await
            .unwrap_err();
        assert!(err.is_cancellation());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 1);
        assert!(target.join("old.txt").exists());

        let mut confirming = ScriptedFrontend::new([Answer::Confirm(true)]);
        let report = pipeline
            .run(&args("existing", "web"), &mut confirming)
            .await
            .unwrap();
        assert!(report.cleared_existing);
        assert!(!target.join("old.txt").exists());
        assert_eq!(manifest_name(&target), "existing");
    }

    #[tokio::test]
    async fn test_unparsable_manifest_stops_run_but_keeps_files() {
        let store = template_store();
        fs::write(store.path().join("web").join(MANIFEST_FILE), "{ broken").unwrap();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = test_env();
        let pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());
        let mut frontend = ScriptedFrontend::default();

        let err = pipeline
            .run(&args("fs", "full-stack"), &mut frontend)
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Manifest { .. }));
        let web = work.path().join("fs/web");
        assert!(web.join(ENV_FILE).exists());
        assert!(!work.path().join("fs/admin").exists());
        assert!(!work.path().join("fs").join(SUMMARY_FILE).exists());
        assert!(frontend
            .events
            .iter()
            .any(|e| matches!(e, PipelineEvent::SubProjectFailed { .. })));
    }

    #[tokio::test]
    async fn test_missing_template_is_filesystem_error() {
        let store = template_store();
        fs::remove_dir_all(store.path().join("admin")).unwrap();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = test_env();
        let pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());

        let err = pipeline
            .run(&args("fs", "full-stack"), &mut ScriptedFrontend::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::FileSystem { .. }));
        assert!(work.path().join("fs/web/package.json").exists());
    }

    #[tokio::test]
    async fn test_skip_install_flag() {
        let store = template_store();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = Environment::default();
        let pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());
        let args = CreateArgs {
            skip_install: true,
            ..args("demo", "web")
        };

        let report = pipeline.run(&args, &mut ScriptedFrontend::default()).await.unwrap();

        assert_eq!(report.install, InstallStep::Skipped(SkipReason::Flag));
    }

    #[tokio::test]
    async fn test_declined_install_still_succeeds() {
        let store = template_store();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = Environment::default();
        let mut pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());
        pipeline.probe = |_| true;
        let mut frontend = ScriptedFrontend::new([Answer::Confirm(false)]);

        let report = pipeline.run(&args("demo", "web"), &mut frontend).await.unwrap();

        assert_eq!(report.install, InstallStep::Skipped(SkipReason::Declined));
        assert_eq!(report.exit_code(), 0);
        assert_eq!(frontend.asked, vec!["Install dependencies now?"]);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_install_failure_in_one_sub_project_does_not_stop_the_other() {
        let store = template_store();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = Environment {
            user_agent: Some("pnpm/9.1.0 npm/? node/v20.11.0".to_string()),
            ..Environment::default()
        };
        let mut pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());
        pipeline.probe = |pm| pm != PackageManager::Bun;
        pipeline.installer = Installer::new().with_command(InstallCommand {
            program: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                "if [ \"$(basename \"$PWD\")\" = web ]; then echo 'web broke' >&2; exit 1; fi; touch installed"
                    .to_string(),
            ],
        });
        let mut frontend = ScriptedFrontend::new([
            Answer::Confirm(true),
            Answer::Select("pnpm".to_string()),
        ]);

        let report = pipeline
            .run(&args("fs", "full-stack"), &mut frontend)
            .await
            .unwrap();

        assert_eq!(report.exit_code(), 0);
        let InstallStep::Attempted {
            package_manager,
            outcomes,
        } = &report.install
        else {
            panic!("install should have been attempted");
        };
        assert_eq!(*package_manager, PackageManager::Pnpm);
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].succeeded);
        assert!(outcomes[0].error_message.as_deref().unwrap().contains("web broke"));
        assert!(outcomes[1].succeeded);
        assert!(work.path().join("fs/admin/installed").exists());
        assert_eq!(report.failed_installs().len(), 1);
        assert!(!report.fully_installed());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_yes_uses_detected_manager_without_questions() {
        let store = template_store();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = Environment {
            user_agent: Some("yarn/1.22.19".to_string()),
            ..Environment::default()
        };
        let mut pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());
        pipeline.probe = |_| true;
        pipeline.installer = Installer::new().with_command(InstallCommand {
            program: "true".to_string(),
            args: Vec::new(),
        });
        let args = CreateArgs {
            yes: true,
            ..args("demo", "admin")
        };
        let mut frontend = ScriptedFrontend::default();

        let report = pipeline.run(&args, &mut frontend).await.unwrap();

        assert!(frontend.asked.is_empty());
        assert!(report.fully_installed());
        assert_eq!(report.package_manager(&env), PackageManager::Yarn);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_availability_probes_run_off_the_calling_thread() {
        static PROBE_THREADS: Mutex<Vec<ThreadId>> = Mutex::new(Vec::new());

        fn recording_probe(pm: PackageManager) -> bool {
            PROBE_THREADS.lock().unwrap().push(thread::current().id());
            pm == PackageManager::Npm
        }

        let store = template_store();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = Environment::default();
        let mut pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());
        pipeline.probe = recording_probe;
        pipeline.installer = Installer::new().with_command(InstallCommand {
            program: "true".to_string(),
            args: Vec::new(),
        });
        let mut frontend = ScriptedFrontend::new([Answer::Confirm(true)]);

        let report = pipeline.run(&args("demo", "web"), &mut frontend).await.unwrap();

        assert_eq!(report.package_manager(&env), PackageManager::Npm);
        assert_eq!(frontend.asked, vec!["Install dependencies now?"]);
        let caller = thread::current().id();
        let threads = PROBE_THREADS.lock().unwrap();
        assert_eq!(threads.len(), PackageManager::ALL.len());
        assert!(threads.iter().all(|id| *id != caller));
    }

    #[test]
    fn test_package_manager_question_preselects() {
        let question =
            package_manager_question(&[PackageManager::Npm, PackageManager::Bun], 1);
        assert_eq!(question.default, 1);
        assert_eq!(question.choices[1].value, "bun");
    }

    #[tokio::test]
    async fn test_compatibility_warning_event() {
        let store = template_store();
        fs::write(store.path().join("template.yaml"), "version: 99.0.0\n").unwrap();
        let work = TempDir::new().unwrap();
        let registry = TemplateRegistry::load(store.path()).unwrap();
        let env = test_env();
        let pipeline = Pipeline::new(&registry, &env, work.path().to_path_buf());
        let mut frontend = ScriptedFrontend::default();

        pipeline.run(&args("demo", "web"), &mut frontend).await.unwrap();

        assert!(frontend
            .events
            .iter()
            .any(|e| matches!(e, PipelineEvent::CompatibilityWarning(w) if w.contains("99.0.0"))));
        assert_eq!(
            TemplateKind::Web,
            frontend
                .events
                .iter()
                .find_map(|e| match e {
                    PipelineEvent::Resolved(r) => Some(r.template_kind()),
                    _ => None,
                })
                .unwrap()
        );
    }
}
