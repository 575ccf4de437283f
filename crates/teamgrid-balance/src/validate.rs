//! Post-hoc audit of formed teams.

use teamgrid_core::{ConstraintConfig, Player, ValidationReport};

/// Check already-formed teams against `config`.
///
/// Flags empty teams and, when an elite cap is set, teams over the cap.
/// Reports only; nothing is repaired.
pub fn validate_constraints(teams: &[Vec<Player>], config: &ConstraintConfig) -> ValidationReport {
    let mut violations = Vec::new();

    for (i, team) in teams.iter().enumerate() {
        if team.is_empty() {
            violations.push(format!("Team {} has no players", i + 1));
        }

        if config.max_elite_per_team > 0 {
            let elites = team.iter().filter(|p| p.is_elite).count();
            if elites > config.max_elite_per_team {
                violations.push(format!(
                    "Team {} has {} elite players (max: {})",
                    i + 1,
                    elites,
                    config.max_elite_per_team
                ));
            }
        }
    }

    ValidationReport {
        is_valid: violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_teams_pass() {
        let teams = vec![
            vec![Player::elite(0, 90.0), Player::new(1, 20.0)],
            vec![Player::elite(2, 85.0), Player::new(3, 25.0)],
        ];
        let report = validate_constraints(&teams, &ConstraintConfig::default());
        assert!(report.is_valid);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn flags_empty_team() {
        let teams = vec![vec![Player::new(0, 10.0)], Vec::new()];
        let report = validate_constraints(&teams, &ConstraintConfig::default());
        assert!(!report.is_valid);
        assert_eq!(report.violations, vec!["Team 2 has no players".to_string()]);
    }

    #[test]
    fn flags_elite_overflow() {
        let teams = vec![vec![
            Player::elite(0, 90.0),
            Player::elite(1, 80.0),
            Player::elite(2, 70.0),
        ]];
        let report = validate_constraints(&teams, &ConstraintConfig::default());
        assert_eq!(
            report.violations,
            vec!["Team 1 has 3 elite players (max: 2)".to_string()]
        );
    }

    #[test]
    fn zero_cap_skips_elite_check() {
        let teams = vec![vec![Player::elite(0, 90.0), Player::elite(1, 80.0), Player::elite(2, 70.0)]];
        let config = ConstraintConfig {
            max_elite_per_team: 0,
            ..ConstraintConfig::default()
        };
        assert!(validate_constraints(&teams, &config).is_valid);
    }
}
