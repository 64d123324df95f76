//! temporal-scaffold CLI entrypoint
//! Parses command-line arguments and dispatches to the use cases.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use temporal_scaffold::application::{
    ApplicationError, ListPresetsUseCase, MakePresetRequest, MakePresetUseCase,
    MakeWorkflowRequest, MakeWorkflowUseCase, TypedName,
};
use temporal_scaffold::core::{ProcessEnv, ScaffoldConfig};
use temporal_scaffold::generation::GenerationOrchestrator;
use temporal_scaffold::infrastructure::{FileSystemOutputService, PhpRenderer};
use temporal_scaffold::presets::{Bootstrap, PresetRegistry};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "temporal-scaffold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./temporal-scaffold.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate a workflow interface, workflow, activity interface and activity
    #[command(name = "make:workflow")]
    MakeWorkflow {
        /// Workflow name, normalized to PascalCase
        name: String,
        /// Task queue the activity is assigned to
        #[arg(long)]
        queue: Option<String>,
        /// Signal method name (repeatable)
        #[arg(long = "signal")]
        signals: Vec<String>,
        /// Query method as <name>:<type> (repeatable)
        #[arg(long = "query")]
        queries: Vec<TypedName>,
        /// Preset applied before the other options
        #[arg(long)]
        preset: Option<String>,
        /// Handler method name
        #[arg(long)]
        method: Option<String>,
        /// Handler parameter as <name>:<type> (repeatable)
        #[arg(long = "param")]
        params: Vec<TypedName>,
        /// Namespace, overriding <configured namespace>\<Name>
        #[arg(long)]
        namespace: Option<String>,
        /// Activity schedule-to-close timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
        /// Output directory, overriding the one derived from the namespace
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Print the generated sources instead of writing them
        #[arg(long)]
        dry_run: bool,
        /// Print the role-marker declarations as JSON
        #[arg(long)]
        manifest: bool,
    },
    /// Write a preset definition skeleton into the preset directory
    #[command(name = "make:preset")]
    MakePreset {
        name: String,
        /// Replace an existing definition
        #[arg(long)]
        force: bool,
    },
    /// List registered presets
    #[command(name = "preset:list")]
    PresetList,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so that stdout carries only command output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let kind = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<ApplicationError>())
                .map(ApplicationError::kind)
                .unwrap_or("Error");
            eprintln!("error[{kind}]: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config = ScaffoldConfig::load(cli.config.as_deref(), &working_dir, &ProcessEnv)
        .map_err(ApplicationError::from)
        .context("Failed to load configuration")?;
    debug!(?config, "Configuration resolved");

    match cli.command {
        Commands::MakeWorkflow {
            name,
            queue,
            signals,
            queries,
            preset,
            method,
            params,
            namespace,
            timeout,
            output_dir,
            dry_run,
            manifest,
        } => {
            let request = MakeWorkflowRequest {
                name,
                task_queue: queue,
                signals,
                queries,
                preset,
                method,
                params,
                namespace,
                timeout,
                output_dir,
                dry_run,
            };
            make_workflow(config, request, manifest).await
        }
        Commands::MakePreset { name, force } => make_preset(&config, name, force),
        Commands::PresetList => preset_list(&config),
    }
}

fn boot_presets(config: &ScaffoldConfig) -> anyhow::Result<Arc<PresetRegistry>> {
    Bootstrap::with_defaults(&config.preset_dir)
        .boot()
        .map_err(ApplicationError::from)
        .context("Failed to load presets")
}

async fn make_workflow(
    config: ScaffoldConfig,
    request: MakeWorkflowRequest,
    manifest: bool,
) -> anyhow::Result<()> {
    info!(workflow = %request.name, dry_run = request.dry_run, "Generating workflow");

    let presets = boot_presets(&config)?;
    let orchestrator = Arc::new(GenerationOrchestrator::new(
        Arc::new(PhpRenderer::new()),
        Arc::new(FileSystemOutputService::new()),
    ));
    let use_case = MakeWorkflowUseCase::new(presets, orchestrator, config);

    let dry_run = request.dry_run;
    let name = request.name.clone();
    let response = use_case
        .execute(request)
        .await
        .with_context(|| format!("Failed to generate workflow '{name}'"))?;

    if manifest {
        let json = serde_json::to_string_pretty(&response.declarations)
            .context("Failed to serialize declarations")?;
        println!("{json}");
    } else if dry_run {
        for file in &response.files {
            println!("// {}", file.path.display());
            print!("{}", file.content);
            println!();
        }
    } else {
        for path in &response.written {
            println!("Created {}", path.display());
        }
    }

    Ok(())
}

fn make_preset(config: &ScaffoldConfig, name: String, force: bool) -> anyhow::Result<()> {
    let response = MakePresetUseCase::new(&config.preset_dir)
        .execute(MakePresetRequest {
            name: name.clone(),
            force,
        })
        .with_context(|| format!("Failed to create preset '{name}'"))?;

    println!("Created {}", response.path.display());
    Ok(())
}

fn preset_list(config: &ScaffoldConfig) -> anyhow::Result<()> {
    let presets = boot_presets(config)?;
    let summaries = ListPresetsUseCase::new(presets).execute();

    if summaries.is_empty() {
        println!("No presets registered.");
        return Ok(());
    }

    let width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for summary in &summaries {
        println!("{:<width$}  {}", summary.name, summary.description);
    }
    Ok(())
}
