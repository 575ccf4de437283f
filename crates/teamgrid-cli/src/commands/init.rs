use std::path::Path;

use teamgrid_core::TeamgridConfig;

pub fn run(path: &str) -> anyhow::Result<()> {
    let output = Path::new(path).join("teamgrid.toml");
    if output.exists() {
        anyhow::bail!("{} already exists", output.display());
    }

    std::fs::write(&output, TeamgridConfig::scaffold().to_toml_string()?)?;
    println!("✓ Generated {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_scaffold_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();

        run(path).unwrap();
        let written = TeamgridConfig::from_file(&dir.path().join("teamgrid.toml")).unwrap();
        assert_eq!(written, TeamgridConfig::default());

        assert!(run(path).is_err());
    }
}
