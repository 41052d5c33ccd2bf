use crate::logic::eval_constants::{
    ENDGAME_MATERIAL, ENDGAME_PAWN_SCALE, MATE_VALUE, SCORE_CASTLE, SCORE_CHECK, SEARCH_BOUND,
    VAL_BISHOP, VAL_KNIGHT, VAL_PAWN, VAL_QUEEN, VAL_ROOK,
};
use serde::{Deserialize, Serialize};
use shakmaty::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Evaluation Parameters
    pub val_pawn: i32,
    pub val_knight: i32,
    pub val_bishop: i32,
    pub val_rook: i32,
    pub val_queen: i32,
    pub endgame_material: i32, // Non-pawn material below which a side is in its endgame
    pub endgame_pawn_scale: f32,

    // Search Parameters
    pub mate_value: i32,
    pub search_bound: i32, // Initial alpha/beta at the root

    // Move Ordering Parameters
    pub score_castle: i32,
    pub score_check: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            val_pawn: VAL_PAWN,
            val_knight: VAL_KNIGHT,
            val_bishop: VAL_BISHOP,
            val_rook: VAL_ROOK,
            val_queen: VAL_QUEEN,
            endgame_material: ENDGAME_MATERIAL,
            endgame_pawn_scale: ENDGAME_PAWN_SCALE,

            mate_value: MATE_VALUE,
            search_bound: SEARCH_BOUND,

            score_castle: SCORE_CASTLE,
            score_check: SCORE_CHECK,
        }
    }
}

#[derive(Deserialize)]
struct EngineConfigJson {
    val_pawn: Option<f32>,
    val_knight: Option<f32>,
    val_bishop: Option<f32>,
    val_rook: Option<f32>,
    val_queen: Option<f32>,
    endgame_material: Option<i32>,
    endgame_pawn_scale: Option<f32>,

    mate_value: Option<i32>,
    search_bound: Option<i32>,

    score_castle: Option<f32>,
    score_check: Option<f32>,
}

impl EngineConfig {
    /// Loads a tuning file. Piece values and ordering bonuses are scale
    /// factors on the defaults; everything else is absolute.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let json_config: EngineConfigJson = serde_json::from_str(json_str)?;
        let default = Self::default();

        Ok(Self {
            val_pawn: apply_scale(default.val_pawn, json_config.val_pawn),
            val_knight: apply_scale(default.val_knight, json_config.val_knight),
            val_bishop: apply_scale(default.val_bishop, json_config.val_bishop),
            val_rook: apply_scale(default.val_rook, json_config.val_rook),
            val_queen: apply_scale(default.val_queen, json_config.val_queen),
            endgame_material: json_config
                .endgame_material
                .unwrap_or(default.endgame_material),
            endgame_pawn_scale: json_config
                .endgame_pawn_scale
                .unwrap_or(default.endgame_pawn_scale),

            mate_value: json_config.mate_value.unwrap_or(default.mate_value),
            search_bound: json_config.search_bound.unwrap_or(default.search_bound),

            score_castle: apply_scale(default.score_castle, json_config.score_castle),
            score_check: apply_scale(default.score_check, json_config.score_check),
        })
    }

    /// Material value of a piece kind under this configuration.
    pub const fn piece_value(&self, role: Role) -> i32 {
        match role {
            Role::Pawn => self.val_pawn,
            Role::Knight => self.val_knight,
            Role::Bishop => self.val_bishop,
            Role::Rook => self.val_rook,
            Role::Queen => self.val_queen,
            Role::King => 0,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn apply_scale(base: i32, scale: Option<f32>) -> i32 {
    scale.map_or(base, |s| (base as f32 * s) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let config = EngineConfig::load_from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.val_queen, 950);
        assert_eq!(config.mate_value, 100_000);
    }

    #[test]
    fn test_load_config_scaled() {
        let json = r#"{
            "val_pawn": 1.5,
            "score_check": 0.5
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.val_pawn, 150);
        assert_eq!(config.score_check, 500);
        // Others should be default
        assert_eq!(config.val_rook, VAL_ROOK);
        assert_eq!(config.score_castle, SCORE_CASTLE);
    }

    #[test]
    fn test_load_config_absolute_fields() {
        let json = r#"{
            "mate_value": 30000,
            "endgame_material": 1500,
            "endgame_pawn_scale": 2.0
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.mate_value, 30000);
        assert_eq!(config.endgame_material, 1500);
        assert!((config.endgame_pawn_scale - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.search_bound, SEARCH_BOUND);
    }

    #[test]
    fn test_load_config_invalid_json() {
        assert!(EngineConfig::load_from_json("{ invalid json }").is_err());
    }

    #[test]
    fn test_deserialize_absolute_config() {
        let json = r#"{
            "val_pawn": 123,
            "val_queen": 999
        }"#;

        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.val_pawn, 123);
        assert_eq!(config.val_queen, 999);
        assert_eq!(config.val_knight, VAL_KNIGHT);
    }

    #[test]
    fn test_piece_value_lookup() {
        let config = EngineConfig::default();
        assert_eq!(config.piece_value(Role::Bishop), VAL_BISHOP);
        assert_eq!(config.piece_value(Role::King), 0);
    }
}
