//! Search configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! max_depth = 6
//! time_divisor = 30
//!
//! [piece_values]
//! bishop = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::PieceKind;

/// Material value of each piece kind, in pawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PieceValues {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
    /// Both sides always have exactly one king, so this cancels out.
    pub king: i32,
}

impl PieceValues {
    #[inline]
    pub fn value(&self, kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }

    /// Upper bound on one side's material: sixteen pieces of the most
    /// valuable kind.
    pub fn material_ceiling(&self) -> i32 {
        let max = PieceKind::ALL
            .iter()
            .map(|&k| self.value(k).abs())
            .max()
            .unwrap_or(0);
        max.saturating_mul(16)
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        Self {
            pawn: 1,
            knight: 3,
            bishop: 3,
            rook: 5,
            queen: 9,
            king: 0,
        }
    }
}

/// Tunables for [`crate::Searcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Hard ceiling for iterative deepening, in plies.
    pub max_depth: u8,
    /// Score of an immediate checkmate. Must exceed any material score.
    pub mate_score: i32,
    /// Stop deepening once the best root score is above this.
    pub win_threshold: i32,
    /// A turn may use `remaining / time_divisor` of the clock.
    pub time_divisor: u64,
    pub piece_values: PieceValues,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 50,
            mate_score: 1000,
            win_threshold: 900,
            time_divisor: 40,
            piece_values: PieceValues::default(),
        }
    }
}

impl SearchConfig {
    /// Default configuration with a different depth ceiling.
    pub fn with_max_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check that mate scores, the win threshold and material scores cannot
    /// be confused with one another.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        if self.time_divisor == 0 {
            return Err(ConfigError::Invalid(
                "time_divisor must be at least 1".into(),
            ));
        }

        let ceiling = self.piece_values.material_ceiling();
        if self.win_threshold <= ceiling {
            return Err(ConfigError::Invalid(format!(
                "win_threshold {} must exceed the material ceiling {}",
                self.win_threshold, ceiling
            )));
        }

        // Mates found at the depth ceiling still have to clear the threshold.
        let slowest_mate = self.mate_score - i32::from(self.max_depth);
        if self.win_threshold >= slowest_mate {
            return Err(ConfigError::Invalid(format!(
                "win_threshold {} must be below mate_score - max_depth ({})",
                self.win_threshold, slowest_mate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
