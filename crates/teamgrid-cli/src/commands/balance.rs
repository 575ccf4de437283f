use std::path::Path;

use serde::Deserialize;
use teamgrid_balance::TeamBalancer;
use teamgrid_core::{ConstraintBalanceResult, Player};
use tracing::info;

/// Roster file accepted by `teamgrid balance`.
#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub players: Vec<Player>,
    #[serde(default)]
    pub existing_teams: Vec<Vec<Player>>,
}

impl RosterFile {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

pub fn run(
    roster: &str,
    num_teams: usize,
    team_size: usize,
    config: Option<&str>,
    format: &str,
) -> anyhow::Result<()> {
    let config = super::load_config(config)?;
    let roster = RosterFile::from_file(Path::new(roster))?;

    let result = TeamBalancer::from_config(&config).balance(
        &roster.players,
        &roster.existing_teams,
        num_teams,
        team_size,
    )?;
    info!(
        algorithm = %result.metadata.algorithm,
        assigned = result.assignments.len(),
        warnings = result.metadata.warnings.len(),
        "balancing complete"
    );

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print!("{}", format_report(&result, &roster.players)),
    }
    Ok(())
}

/// Human-readable summary of a balancing result.
pub fn format_report(result: &ConstraintBalanceResult, players: &[Player]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Algorithm:  {}\n", result.metadata.algorithm));
    out.push_str(&format!("Iterations: {}\n", result.metadata.iterations));
    out.push_str(&format!(
        "Balance:    score {:.1}, variance {:.1}\n",
        result.balance.score, result.balance.variance
    ));
    out.push_str(&format!(
        "Enforced:   {}\n\n",
        result.metadata.constraints_enforced.join(", ")
    ));

    for (team, weight) in result.balance.team_weights.iter().enumerate() {
        out.push_str(&format!("Team {} (total {:.1})\n", team + 1, weight));
        for index in result.members_of(team) {
            let Some(player) = players.iter().find(|p| p.index == index) else {
                continue;
            };
            let name = player.username.as_deref().unwrap_or("-");
            let marker = if player.is_elite { " ★" } else { "" };
            out.push_str(&format!(
                "  #{index:<4} {name:<20} {:>8.1}{marker}\n",
                player.weight
            ));
        }
    }

    if !result.metadata.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for warning in &result.metadata.warnings {
            out.push_str(&format!("  ⚠️  {warning}\n"));
        }
    }
    out
}
