use std::path::PathBuf;

use anyhow::Context;
use arti_bom::bom::generator::{apply, generate};
use arti_bom::bom::install::install;
use arti_bom::bom::package::package_bom;
use arti_bom::config::{BomSettings, StrategyKind};
use arti_bom::workspace::Workspace;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arti-bom", version, about = "Generates a Maven BOM from the artifacts of a build")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the BOM for a project of the workspace
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// JSON description of the build's projects and their resolved artifacts
    #[arg(long)]
    workspace: PathBuf,

    /// The generating project as groupId:artifactId
    #[arg(long)]
    project: String,

    /// JSON settings file; the flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Include pattern groupId:artifactId:type:classifier, trailing segments optional
    #[arg(long = "include")]
    includes: Vec<String>,

    /// Exclude pattern groupId:artifactId:type:classifier, trailing segments optional
    #[arg(long = "exclude")]
    excludes: Vec<String>,

    #[arg(long)]
    pom_location: Option<PathBuf>,

    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// With the reactor-with-self-handling strategy: include the generating project itself
    #[arg(long)]
    include_current_project: bool,

    /// Also install the BOM into this local repository directory
    #[arg(long)]
    install_into: Option<PathBuf>,

    /// Replace the project's descriptor with the generated BOM
    #[arg(long)]
    package: bool,

    /// Write the updated workspace (attached BOM, merged dependency management) here
    #[arg(long)]
    write_workspace: Option<PathBuf>,
}
impl GenerateArgs {
    fn settings(&self) -> anyhow::Result<BomSettings> {
        let mut settings = match &self.config {
            Some(path) => BomSettings::load(path)?,
            None => BomSettings::default(),
        };

        for include in &self.includes {
            settings.artifact_set_mut().add_include(include.as_str());
        }
        for exclude in &self.excludes {
            settings.artifact_set_mut().add_exclude(exclude.as_str());
        }
        if let Some(pom_location) = &self.pom_location {
            settings.pom_location = Some(pom_location.clone());
        }
        if let Some(strategy) = self.strategy {
            settings.strategy = strategy;
        }
        if self.include_current_project {
            settings.include_current_project = true;
        }
        Ok(settings)
    }

    fn run(&self) -> anyhow::Result<()> {
        let settings = self.settings()?;
        let mut workspace = Workspace::load(&self.workspace)
            .with_context(|| format!("failed to load workspace {}", self.workspace.display()))?;

        let outcome = generate(&workspace, &self.project, &settings)
            .with_context(|| format!("unable to write bom pom for {}", self.project))?;
        info!("wrote {} managed dependencies to {}", outcome.model.dependency_management.len(), outcome.pom_location.display());

        let project = workspace.project_mut(&self.project)?;
        apply(&outcome, project);

        if let Some(repository) = &self.install_into {
            let installed = install(&outcome.artifact, &outcome.pom_location, repository)
                .context("failed to install bom")?;
            info!("installed {}", installed.display());
        }

        if self.package {
            package_bom(project)?;
        }

        if let Some(path) = &self.write_workspace {
            workspace.save(path)
                .with_context(|| format!("failed to write workspace {}", path.display()))?;
        }
        Ok(())
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Generate(args) => args.run(),
    }
}
