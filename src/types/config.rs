use crate::engine::formation::FormationRules;
use crate::engine::ScoringRules;
use crate::error::ScoreError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub scoring: Option<MultiplierConfig>,
    pub formation: Option<FormationConfig>,
    pub substitution: Option<SubstitutionConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MultiplierConfig {
    pub captain_multiplier: Option<i32>,
    pub triple_captain_multiplier: Option<i32>,
}

/// Inclusive `[min, max]` bounds per category.
#[derive(Debug, Clone, Deserialize)]
pub struct FormationConfig {
    pub starting_size: Option<usize>,
    pub gk: Option<[u32; 2]>,
    pub def: Option<[u32; 2]>,
    pub mid: Option<[u32; 2]>,
    pub fwd: Option<[u32; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubstitutionConfig {
    pub require_legal_completion: Option<bool>,
}

fn bounds(value: Option<[u32; 2]>, default: (u32, u32)) -> (u32, u32) {
    value.map(|[min, max]| (min, max)).unwrap_or(default)
}

impl ScoringConfig {
    pub fn rules(&self) -> ScoringRules {
        let defaults = ScoringRules::default();
        let formation = match &self.formation {
            Some(formation) => FormationRules {
                starting_size: formation
                    .starting_size
                    .unwrap_or(defaults.formation.starting_size),
                goalkeepers: bounds(formation.gk, defaults.formation.goalkeepers),
                defenders: bounds(formation.def, defaults.formation.defenders),
                midfielders: bounds(formation.mid, defaults.formation.midfielders),
                forwards: bounds(formation.fwd, defaults.formation.forwards),
            },
            None => defaults.formation,
        };

        ScoringRules {
            captain_multiplier: self
                .scoring
                .as_ref()
                .and_then(|scoring| scoring.captain_multiplier)
                .unwrap_or(defaults.captain_multiplier),
            triple_captain_multiplier: self
                .scoring
                .as_ref()
                .and_then(|scoring| scoring.triple_captain_multiplier)
                .unwrap_or(defaults.triple_captain_multiplier),
            formation,
            require_legal_completion: self
                .substitution
                .as_ref()
                .and_then(|substitution| substitution.require_legal_completion)
                .unwrap_or(defaults.require_legal_completion),
        }
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        let rules = self.rules();

        if rules.captain_multiplier < 1 || rules.triple_captain_multiplier < 1 {
            return Err(ScoreError::ConfigParse(
                "scoring multipliers must be at least 1".to_string(),
            ));
        }

        let formation = rules.formation;
        if formation.goalkeepers != (1, 1) {
            return Err(ScoreError::ConfigParse(
                "formation.gk must be [1, 1]; goalkeepers only swap like-for-like".to_string(),
            ));
        }

        for (name, (min, max)) in [
            ("def", formation.defenders),
            ("mid", formation.midfielders),
            ("fwd", formation.forwards),
        ] {
            if min > max {
                return Err(ScoreError::ConfigParse(format!(
                    "formation.{name} minimum {min} exceeds maximum {max}"
                )));
            }
        }

        let min_total = 1 + formation.defenders.0 + formation.midfielders.0 + formation.forwards.0;
        let max_total = 1 + formation.defenders.1 + formation.midfielders.1 + formation.forwards.1;
        let size = formation.starting_size as u32;
        if size < min_total || size > max_total {
            return Err(ScoreError::ConfigParse(format!(
                "formation.starting_size {size} is unreachable with bounds {min_total}..={max_total}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: ScoringConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.rules(), ScoringRules::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[scoring]
captain_multiplier = 2
triple_captain_multiplier = 4

[formation]
starting_size = 11
gk = [1, 1]
def = [3, 5]
mid = [2, 5]
fwd = [1, 3]

[substitution]
require_legal_completion = true
"#,
        )
        .expect("config should parse");

        let rules = cfg.rules();
        assert_eq!(rules.triple_captain_multiplier, 4);
        assert_eq!(rules.formation.starting_size, 11);
        assert_eq!(rules.formation.defenders, (3, 5));
        assert!(rules.require_legal_completion);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[formation]
mid = [5, 3]
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("inverted bounds should fail");
        assert!(err.to_string().contains("formation.mid"));
    }

    #[test]
    fn validate_rejects_goalkeeper_range() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[formation]
gk = [1, 2]
"#,
        )
        .expect("config should parse");
        assert!(matches!(cfg.validate(), Err(ScoreError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_zero_multiplier() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[scoring]
captain_multiplier = 0
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_unreachable_starting_size() {
        let cfg: ScoringConfig = toml::from_str(
            r#"
[formation]
starting_size = 20
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("size should be unreachable");
        assert!(err.to_string().contains("starting_size"));
    }
}
