use std::path::Path;

use serde::Deserialize;
use teamgrid_balance::validate_constraints;
use teamgrid_core::Player;

/// Teams file accepted by `teamgrid validate`.
#[derive(Debug, Deserialize)]
pub struct TeamsFile {
    pub teams: Vec<Vec<Player>>,
}

pub fn run(teams: &str, max_elite: Option<usize>, config: Option<&str>) -> anyhow::Result<()> {
    let mut constraints = super::load_config(config)?.constraints;
    if let Some(cap) = max_elite {
        constraints.max_elite_per_team = cap;
    }

    let content = std::fs::read_to_string(Path::new(teams))?;
    let file: TeamsFile = serde_json::from_str(&content)?;
    let report = validate_constraints(&file.teams, &constraints);

    if report.is_valid {
        println!("✅ {} teams pass all constraints", file.teams.len());
        return Ok(());
    }

    for violation in &report.violations {
        println!("❌ {violation}");
    }
    anyhow::bail!("{} constraint violation(s)", report.violations.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_teams(json: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teams.json");
        std::fs::write(&path, json).unwrap();
        let path = path.to_str().unwrap().to_string();
        (dir, path)
    }

    #[test]
    fn passes_valid_teams() {
        let (_dir, path) = write_teams(
            r#"{"teams": [[{"index": 0, "weight": 5.0}], [{"index": 1, "weight": 6.0}]]}"#,
        );
        assert!(run(&path, None, None).is_ok());
    }

    #[test]
    fn max_elite_override_applies() {
        let (_dir, path) = write_teams(
            r#"{"teams": [[{"index": 0, "weight": 5.0, "is_elite": true}, {"index": 1, "weight": 6.0, "is_elite": true}]]}"#,
        );
        assert!(run(&path, None, None).is_ok());
        assert!(run(&path, Some(1), None).is_err());
    }
}
