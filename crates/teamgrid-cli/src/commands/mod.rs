pub mod balance;
pub mod init;
pub mod validate;

use std::path::Path;

use teamgrid_core::TeamgridConfig;

/// Load teamgrid.toml if a path was given, defaults otherwise.
pub fn load_config(path: Option<&str>) -> anyhow::Result<TeamgridConfig> {
    match path {
        Some(p) => Ok(TeamgridConfig::from_file(Path::new(p))?),
        None => Ok(TeamgridConfig::default()),
    }
}
