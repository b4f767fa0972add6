use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use component_resolver::component::error::RequestError;
use component_resolver::component::types::{ComponentAction, ComponentRequest, InstanceContext};
use component_resolver::config::{ResolverConfig, log_path};
use component_resolver::logging;
use component_resolver::plan::Planner;
use component_resolver::version::selector::select_latest;

#[derive(Parser)]
#[command(name = "component-resolver")]
#[command(version, about = "Resolve component versions and package locations")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve version, download location, and staging folder for a request
    Plan(PlanArgs),
    /// Print the latest strictly formatted version among the given candidates
    Latest {
        /// Only consider candidates starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
        candidates: Vec<String>,
    },
}

#[derive(Args)]
struct PlanArgs {
    #[arg(long)]
    name: String,
    /// Version to act on; latest when omitted
    #[arg(long)]
    version: Option<String>,
    /// Install or Uninstall
    #[arg(long, default_value = "Install")]
    action: String,
    /// Explicit package URL
    #[arg(long)]
    source: Option<String>,
    /// Only consider latest candidates starting with this prefix
    #[arg(long)]
    prefix: Option<String>,
    #[command(flatten)]
    context: ContextArgs,
}

#[derive(Args)]
struct ContextArgs {
    #[arg(long)]
    region: String,
    #[arg(long)]
    platform: String,
    #[arg(long, default_value = "")]
    platform_version: String,
    #[arg(long)]
    arch: String,
    #[arg(long, default_value = "")]
    installer_name: String,
    #[arg(long, default_value = "zip")]
    compress_format: String,
}

impl From<ContextArgs> for InstanceContext {
    fn from(args: ContextArgs) -> Self {
        Self {
            region: args.region,
            platform: args.platform,
            platform_version: args.platform_version,
            arch: args.arch,
            installer_name: args.installer_name,
            compress_format: args.compress_format,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::default(),
    };

    // Logging is best effort; commands still run without a subscriber
    let _guard = match logging::init(&log_path(), &config.log) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e}");
            None
        }
    };

    match cli.command {
        Command::Latest { prefix, candidates } => {
            println!("{}", select_latest(&candidates, prefix.as_deref()));
            Ok(())
        }
        Command::Plan(args) => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run_plan(config, args)),
    }
}

fn build_request(args: &PlanArgs) -> Result<ComponentRequest, RequestError> {
    let action: ComponentAction = args.action.parse()?;

    let mut request = ComponentRequest::new(&args.name, action);
    if let Some(version) = &args.version {
        request = request.with_version(version);
    }
    if let Some(source) = &args.source {
        request = request.with_source(source);
    }
    Ok(request)
}

async fn run_plan(config: ResolverConfig, args: PlanArgs) -> anyhow::Result<()> {
    let request = build_request(&args)?;
    let context = InstanceContext::from(args.context);

    let planner = Planner::from_config(&config, args.prefix)?;
    let timeout = Duration::from_millis(config.fetch_timeout_ms);

    let plan = tokio::time::timeout(timeout, planner.plan(&request, &context))
        .await
        .with_context(|| format!("Timed out resolving {} after {:?}", request.name, timeout))??;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
