//! # MIRRORCTL CLI
//!
//! Command-line interface for mirroring status conditions between Kubernetes objects.
//!
//! ## Usage
//!
//! ```bash
//! # Mirror Ready from a Machine manifest onto a Cluster manifest and print the result
//! mirrorctl file --source machine.yaml --target cluster.yaml --type Ready --target-type MachineReady
//!
//! # Mirror between live objects and patch the target status
//! mirrorctl cluster --namespace default \
//!     --source-api-version cluster.x-k8s.io/v1beta2 --source-kind Machine --source-name m1 \
//!     --target-api-version cluster.x-k8s.io/v1beta2 --target-kind Cluster --target-name c1 \
//!     --type Ready
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use condition_mirror::config::CliConfig;
use condition_mirror::{
    set_unstructured_mirror_condition, unstructured, ConditionStatus, FallbackCondition,
    MirrorOption, TargetConditionType,
};
use kube::api::{Api, Patch, PatchParams};
use kube::core::{DynamicObject, GroupVersionKind};
use kube::discovery::{self, Scope};
use kube::Client;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Condition Mirror CLI
#[derive(Parser)]
#[command(name = "mirrorctl")]
#[command(about = "Mirror status conditions between Kubernetes objects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mirror a condition between two manifests and print the updated target
    File {
        /// Source object manifest (YAML or JSON)
        #[arg(long)]
        source: PathBuf,
        /// Target object manifest (YAML or JSON)
        #[arg(long)]
        target: PathBuf,
        #[command(flatten)]
        mirror: MirrorArgs,
    },
    /// Mirror a condition between two live objects and patch the target status
    Cluster {
        /// Namespace of both objects (defaults to current context namespace)
        #[arg(short, long)]
        namespace: Option<String>,
        /// API version of the source object, e.g. cluster.x-k8s.io/v1beta2
        #[arg(long)]
        source_api_version: String,
        #[arg(long)]
        source_kind: String,
        #[arg(long)]
        source_name: String,
        /// API version of the target object
        #[arg(long)]
        target_api_version: String,
        #[arg(long)]
        target_kind: String,
        #[arg(long)]
        target_name: String,
        #[command(flatten)]
        mirror: MirrorArgs,
    },
}

#[derive(Args, Debug, Clone)]
struct MirrorArgs {
    /// Condition type to read from the source object
    #[arg(long = "type")]
    condition_type: String,
    /// Condition type to write on the target object (defaults to --type)
    #[arg(long)]
    target_type: Option<String>,
    /// Status to use when the source condition is missing
    #[arg(long, value_parser = parse_status, requires = "fallback_reason")]
    fallback_status: Option<ConditionStatus>,
    #[arg(long, requires = "fallback_status")]
    fallback_reason: Option<String>,
    #[arg(long, requires = "fallback_status")]
    fallback_message: Option<String>,
}

impl MirrorArgs {
    fn target_condition_type(&self) -> Option<TargetConditionType> {
        self.target_type.clone().map(TargetConditionType)
    }

    fn fallback(&self) -> Option<FallbackCondition> {
        self.fallback_status.map(|status| {
            FallbackCondition::new(
                status,
                self.fallback_reason.clone().unwrap_or_default(),
                self.fallback_message.clone().unwrap_or_default(),
            )
        })
    }
}

fn parse_status(value: &str) -> Result<ConditionStatus, String> {
    match value {
        "True" | "true" => Ok(ConditionStatus::True),
        "False" | "false" => Ok(ConditionStatus::False),
        "Unknown" | "unknown" => Ok(ConditionStatus::Unknown),
        other => Err(format!(
            "invalid status '{other}', expected True, False or Unknown"
        )),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = CliConfig::from_env();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::File {
            source,
            target,
            mirror,
        } => {
            let updated = mirror_files(&source, &target, &mirror)?;
            print!("{}", serde_yaml::to_string(&updated)?);
        }
        Commands::Cluster {
            namespace,
            source_api_version,
            source_kind,
            source_name,
            target_api_version,
            target_kind,
            target_name,
            mirror,
        } => {
            // Configure rustls crypto provider before creating the client
            if rustls::crypto::ring::default_provider()
                .install_default()
                .is_err()
            {
                debug!("rustls crypto provider already installed");
            }

            let client = Client::try_default()
                .await
                .context("Failed to create Kubernetes client")?;
            let namespace = namespace.unwrap_or_else(|| client.default_namespace().to_string());

            let source_api =
                dynamic_api(&client, &namespace, &source_api_version, &source_kind).await?;
            let target_api =
                dynamic_api(&client, &namespace, &target_api_version, &target_kind).await?;

            let source = source_api
                .get(&source_name)
                .await
                .with_context(|| format!("Failed to get {source_kind} {namespace}/{source_name}"))?;
            let mut target = target_api
                .get(&target_name)
                .await
                .with_context(|| format!("Failed to get {target_kind} {namespace}/{target_name}"))?;

            mirror_objects(&source, &mut target, &mirror)?;

            let conditions = unstructured::get_all(&target)?;
            let patch = json!({
                "status": {
                    "conditions": conditions
                }
            });

            target_api
                .patch_status(
                    &target_name,
                    &PatchParams::apply(&config.field_manager),
                    &Patch::Merge(patch),
                )
                .await
                .with_context(|| {
                    format!("Failed to update status for {target_kind} {namespace}/{target_name}")
                })?;

            info!(
                "Mirrored {} from {}/{} onto {}/{}",
                mirror.condition_type, source_kind, source_name, target_kind, target_name
            );
        }
    }

    Ok(())
}

/// Mirror between two manifest files and return the updated target
fn mirror_files(source: &Path, target: &Path, mirror: &MirrorArgs) -> Result<DynamicObject> {
    let source = read_manifest(source)?;
    let mut target = read_manifest(target)?;
    mirror_objects(&source, &mut target, mirror)?;
    Ok(target)
}

fn mirror_objects(
    source: &DynamicObject,
    target: &mut DynamicObject,
    mirror: &MirrorArgs,
) -> Result<()> {
    let target_type = mirror.target_condition_type();
    let fallback = mirror.fallback();

    let mut opts: Vec<&dyn MirrorOption> = Vec::new();
    if let Some(target_type) = &target_type {
        opts.push(target_type);
    }
    if let Some(fallback) = &fallback {
        opts.push(fallback);
    }

    set_unstructured_mirror_condition(source, target, &mirror.condition_type, &opts)
        .context("Failed to mirror condition")
}

/// Read a YAML (or JSON) manifest as a dynamic object
fn read_manifest(path: &Path) -> Result<DynamicObject> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse manifest {}", path.display()))
}

/// Split an apiVersion into group and version; core resources have an empty group
fn split_api_version(api_version: &str) -> (&str, &str) {
    api_version.split_once('/').unwrap_or(("", api_version))
}

/// Resolve a kind through discovery and build a dynamic API for it
async fn dynamic_api(
    client: &Client,
    namespace: &str,
    api_version: &str,
    kind: &str,
) -> Result<Api<DynamicObject>> {
    let (group, version) = split_api_version(api_version);
    let gvk = GroupVersionKind::gvk(group, version, kind);
    let (resource, capabilities) = discovery::pinned_kind(client, &gvk)
        .await
        .with_context(|| format!("Failed to discover {kind} in {api_version}"))?;

    Ok(match capabilities.scope {
        Scope::Namespaced => Api::namespaced_with(client.clone(), namespace, &resource),
        Scope::Cluster => Api::all_with(client.clone(), &resource),
    })
}
