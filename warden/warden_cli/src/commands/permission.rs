//! Permission string commands
//!
//! These commands work on permission strings alone and never touch a role
//! catalog.

use anyhow::Result;
use clap::Args;
use tracing::{debug, warn};

use warden_core::grammar::parse_strict;
use warden_core::hierarchy::implied_actions;
use warden_core::{CheckMode, Permission, PermissionSet, Scope};

/// Arguments for the parse command
#[derive(Args)]
pub struct ParseArgs {
    /// Permission string, e.g. `tenant:user-edit`
    pub permission: String,
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Only list permissions in this scope
    #[clap(long)]
    pub scope: Option<Scope>,
}

/// Arguments for the check command
#[derive(Args)]
pub struct CheckArgs {
    /// Granted permission strings
    #[clap(long, num_args = 1..)]
    pub granted: Vec<String>,

    /// Required permission strings
    #[clap(long, num_args = 1..)]
    pub require: Vec<String>,

    /// How the required permissions are combined (`all` or `any`)
    #[clap(long, default_value_t = CheckMode::All)]
    pub mode: CheckMode,
}

/// Implementation of the parse command
///
/// Returns `false` if the permission string is malformed.
pub fn execute_parse(args: &ParseArgs) -> Result<bool> {
    match parse_strict(&args.permission) {
        Ok(parsed) => {
            let implied: Vec<&str> = implied_actions(parsed.action)
                .iter()
                .map(|a| a.as_str())
                .collect();

            println!("scope:    {}", parsed.scope);
            println!("resource: {}", parsed.resource);
            println!("action:   {}", parsed.action);
            println!("implies:  {}", implied.join(", "));
            Ok(true)
        }
        Err(reason) => {
            println!("malformed: {}", reason);
            Ok(false)
        }
    }
}

/// Implementation of the list command
pub fn execute_list(args: &ListArgs) -> Result<bool> {
    for permission in Permission::all() {
        if args.scope.map_or(true, |scope| permission.scope() == scope) {
            println!("{}", permission);
        }
    }
    Ok(true)
}

/// Implementation of the check command
///
/// Returns `false` when the requirement is denied.
pub fn execute_check(args: &CheckArgs) -> Result<bool> {
    let granted: PermissionSet = args.granted.iter().cloned().collect();
    for permission in granted.malformed() {
        warn!(permission, "Granted permission is malformed and grants nothing");
    }

    let allowed = granted.check(&args.require, args.mode);
    debug!(mode = %args.mode, required = ?args.require, allowed, "Checked requirement");

    println!("{}", if allowed { "allowed" } else { "denied" });
    Ok(allowed)
}
