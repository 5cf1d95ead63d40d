// src/board.rs
//! Готовое поле вместе с отчётом о генерации
//!
//! Это единственный объект, который передаётся слою отображения или
//! серверу: генерация ничего не хранит глобально.

use crate::config::BoardGenerationParams;
use crate::error::MapgenError;
use crate::generator::{GenerationReport, generate_board};
use crate::grid::{Cell, Grid, GridRows};
use crate::stats::TerrainStats;
use crate::terrain::{Color, Terrain};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    /// `None` для поля, загруженного из снимка
    report: Option<GenerationReport>,
}

impl Board {
    #[must_use]
    pub fn generate(params: &BoardGenerationParams) -> Self {
        generate_board(params)
    }

    #[must_use]
    pub fn generated(grid: Grid, report: GenerationReport) -> Self {
        Self {
            grid,
            report: Some(report),
        }
    }

    /// Восстанавливает поле из снимка, полностью заменяя состояние без генерации.
    pub fn load(rows: GridRows) -> Result<Self, MapgenError> {
        Ok(Self {
            grid: Grid::load(rows)?,
            report: None,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, MapgenError> {
        let rows: GridRows = serde_json::from_str(json)?;
        Self::load(rows)
    }

    pub fn to_json(&self) -> Result<String, MapgenError> {
        Ok(serde_json::to_string_pretty(&self.grid.to_rows())?)
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn report(&self) -> Option<&GenerationReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn get_cell(&self, q: i32, r: i32) -> Option<&Cell> {
        self.grid.get(q, r)
    }

    #[must_use]
    pub fn neighbors(&self, q: i32, r: i32) -> Vec<&Cell> {
        self.grid.neighbors(q, r)
    }

    #[must_use]
    pub fn cells_by_terrain(&self, terrain: Terrain) -> Vec<&Cell> {
        self.grid.cells_by_terrain(terrain)
    }

    pub fn set_cell_color(&mut self, q: i32, r: i32, color: Color) {
        self.grid.set_color(q, r, color);
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    #[must_use]
    pub fn to_rows(&self) -> GridRows {
        self.grid.to_rows()
    }

    #[must_use]
    pub fn stats(&self) -> TerrainStats {
        TerrainStats::from_grid(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_keeps_every_cell() {
        let mut board = Board::generate(&BoardGenerationParams::with_seed(17));
        board.set_cell_color(2, -1, Color::Green);
        board.set_cell_color(-6, 3, Color::Black);

        let json = board.to_json().unwrap();
        let restored = Board::from_json(&json).unwrap();

        assert!(restored.report().is_none());
        assert_eq!(restored.grid(), board.grid());
        assert_eq!(restored.get_cell(2, -1).unwrap().color(), Color::Green);
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(Board::from_json("{"), Err(MapgenError::Json(_))));
        assert!(matches!(
            Board::from_json("[[]]"),
            Err(MapgenError::GridShape(_))
        ));
    }

    #[test]
    fn queries_delegate_to_the_grid() {
        let board = Board::generate(&BoardGenerationParams::with_seed(3));
        assert_eq!(board.dimensions(), (13, 13));
        assert_eq!(board.get_cell(0, 0).unwrap().terrain(), Terrain::Zeus);
        assert!(board.get_cell(0, 7).is_none());
        assert_eq!(board.neighbors(0, 0).len(), 6);
        assert_eq!(board.cells_by_terrain(Terrain::Zeus).len(), 1);
        assert_eq!(board.stats().total, 127);
    }
}
