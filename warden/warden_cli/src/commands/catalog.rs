//! Role catalog commands

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

use warden_core::{PrincipalId, ScenarioId, TenantId};
use warden_policy::{AccessContext, PermissionSource, RoleCatalog, ValidationMode};

/// Arguments for the validate command
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to a `.toml` or `.json` role catalog
    pub catalog: PathBuf,

    /// Treat malformed permissions as warnings, overriding the catalog
    #[clap(long)]
    pub lenient: bool,
}

/// Arguments for the resolve command
#[derive(Args)]
pub struct ResolveArgs {
    /// Path to a `.toml` or `.json` role catalog
    pub catalog: PathBuf,

    /// Principal ID
    #[clap(long)]
    pub principal: PrincipalId,

    /// Tenant ID
    #[clap(long)]
    pub tenant: TenantId,

    /// Scenario ID, to include the principal's scenario role
    #[clap(long)]
    pub scenario: Option<ScenarioId>,

    /// Print the granted permissions as a JSON array
    #[clap(long)]
    pub json: bool,
}

fn load(path: &Path) -> Result<RoleCatalog> {
    RoleCatalog::load(path).with_context(|| format!("Failed to load catalog {}", path.display()))
}

/// Implementation of the validate command
///
/// Returns `false` if the catalog would not load.
pub fn execute_validate(args: &ValidateArgs) -> Result<bool> {
    let catalog = load(&args.catalog)?;
    let mode = if args.lenient {
        ValidationMode::Lenient
    } else {
        catalog.validation
    };

    let report = catalog.validate();
    for role in report.roles.iter().filter(|r| !r.is_clean()) {
        println!("{} ({}):", role.role_name, role.role);
        for issue in &role.issues {
            println!("  {}", issue);
        }
    }
    for problem in &report.structural {
        println!("error: {}", problem);
    }

    let passed = report.passes(mode);
    println!(
        "{} roles, {} assignments: {} errors, {} warnings, {} structural ({:?})",
        catalog.roles.len(),
        catalog.assignments.len(),
        report.error_count(),
        report.warning_count(),
        report.structural.len(),
        mode
    );
    println!("{}", if passed { "ok" } else { "failed" });

    Ok(passed)
}

/// Implementation of the resolve command
pub fn execute_resolve(args: &ResolveArgs) -> Result<bool> {
    let store = load(&args.catalog)?
        .into_store()
        .context("Catalog does not load")?;

    let context = match args.scenario {
        Some(scenario) => AccessContext::scenario(args.tenant, scenario),
        None => AccessContext::tenant(args.tenant),
    };

    let granted = store
        .granted_permissions(&args.principal, &context)
        .with_context(|| format!("Failed to resolve permissions for {}", args.principal))?;
    info!(principal = %args.principal, %context, count = granted.len(), "Resolved permissions");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&granted)?);
    } else {
        for permission in &granted {
            println!("{}", permission);
        }
    }

    Ok(true)
}
