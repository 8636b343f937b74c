//! Assembly of everything a command needs before it can run
//!
//! Every command starts the same way: load the rcfile, merge it with the
//! invocation options, discover the manifest paths the resolved sources
//! name, and load those manifests. Only then do the commands diverge.

use crate::config::options::CliOptions;
use crate::config::rcfile::RcConfig;
use crate::config::resolved::Resolved;
use crate::disk::Disk;
use crate::error::VersyncError;
use crate::manifest::Manifest;
use crate::workspace_discovery::WorkspaceDiscovery;

/// The resolved policy plus the loaded manifests it applies to.
pub struct Input {
    pub resolved: Resolved,
    pub manifests: Vec<Manifest>,
}

pub fn get_input(disk: &dyn Disk, options: &CliOptions) -> Result<Input, VersyncError> {
    let rc = RcConfig::load(disk, options.config_path.as_deref())?;
    let resolved = Resolved::from_layers(&rc, options)?;
    let paths = WorkspaceDiscovery::new(disk).discover(&resolved.source);
    let manifests = Manifest::load_all(disk, &paths)?;

    Ok(Input {
        resolved,
        manifests,
    })
}
