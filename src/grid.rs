// src/grid.rs
//! Шестиугольное поле клеток
//!
//! Клетки хранятся «рваными» строками: строка `i` соответствует `q = i - R`,
//! а внутри строки клетки идут по возрастанию `r` в допустимом для этого `q`
//! диапазоне. Та же раскладка используется для сериализации.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::MapgenError;
use crate::hex::{BOARD_RADIUS, Hex, MAX_BOARD_RADIUS};
use crate::terrain::{Color, Terrain};

/// Клетка поля
///
/// Координаты задаются при создании и больше не меняются; местность и цвет
/// изменяются только через сеттеры [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    q: i32,
    r: i32,
    terrain: Terrain,
    #[serde(default)]
    color: Color,
}

impl Cell {
    #[must_use]
    pub fn new(q: i32, r: i32, terrain: Terrain) -> Self {
        Self {
            q,
            r,
            terrain,
            color: Color::None,
        }
    }

    #[must_use]
    pub fn q(&self) -> i32 {
        self.q
    }

    #[must_use]
    pub fn r(&self) -> i32 {
        self.r
    }

    #[must_use]
    pub fn hex(&self) -> Hex {
        Hex::new(self.q, self.r)
    }

    #[must_use]
    pub fn terrain(&self) -> Terrain {
        self.terrain
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Транспортная форма поля: строки по `q`, внутри строки клетки по `r`
pub type GridRows = Vec<Vec<Cell>>;

/// Поле в форме шестиугольника радиуса `radius` (`3·R·(R+1)+1` клеток)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRows", into = "GridRows")]
pub struct Grid {
    radius: i32,
    rows: Vec<Vec<Cell>>,
}

/// Допустимые значения `r` в строке `q`
fn r_range(radius: i32, q: i32) -> RangeInclusive<i32> {
    (-radius).max(-q - radius)..=radius.min(-q + radius)
}

impl Grid {
    /// Создаёт поле радиуса `radius`, где каждая клетка — мелководье.
    ///
    /// Радиус приводится к диапазону `0..=MAX_BOARD_RADIUS`.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        let radius = radius.clamp(0, MAX_BOARD_RADIUS);
        let rows = (-radius..=radius)
            .map(|q| {
                r_range(radius, q)
                    .map(|r| Cell::new(q, r, Terrain::Shallow))
                    .collect()
            })
            .collect();
        Self { radius, rows }
    }

    /// Стандартное поле радиуса [`BOARD_RADIUS`]
    #[must_use]
    pub fn standard() -> Self {
        Self::new(BOARD_RADIUS)
    }

    #[must_use]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Ширина и высота поля в клетках (13×13 для радиуса 6)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        let side = (2 * self.radius + 1) as usize;
        (side, side)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn contains(&self, hex: Hex) -> bool {
        self.index_of(hex.q, hex.r).is_some()
    }

    fn index_of(&self, q: i32, r: i32) -> Option<(usize, usize)> {
        if q.abs() > self.radius {
            return None;
        }
        let range = r_range(self.radius, q);
        if !range.contains(&r) {
            return None;
        }
        Some(((q + self.radius) as usize, (r - range.start()) as usize))
    }

    /// Клетка по координатам; `None` для координат вне шестиугольника
    #[must_use]
    pub fn get(&self, q: i32, r: i32) -> Option<&Cell> {
        let (row, col) = self.index_of(q, r)?;
        self.rows.get(row)?.get(col)
    }

    fn get_mut(&mut self, q: i32, r: i32) -> Option<&mut Cell> {
        let (row, col) = self.index_of(q, r)?;
        self.rows.get_mut(row)?.get_mut(col)
    }

    #[must_use]
    pub fn terrain_at(&self, hex: Hex) -> Option<Terrain> {
        self.get(hex.q, hex.r).map(Cell::terrain)
    }

    /// Существующие соседи клетки (от 0 до 6)
    #[must_use]
    pub fn neighbors(&self, q: i32, r: i32) -> Vec<&Cell> {
        Hex::new(q, r)
            .neighbors()
            .filter_map(|n| self.get(n.q, n.r))
            .collect()
    }

    /// Все клетки заданного типа местности
    #[must_use]
    pub fn cells_by_terrain(&self, terrain: Terrain) -> Vec<&Cell> {
        self.iter().filter(|c| c.terrain == terrain).collect()
    }

    /// Координаты всех клеток заданного типа, в порядке хранения
    #[must_use]
    pub fn hexes_by_terrain(&self, terrain: Terrain) -> Vec<Hex> {
        self.iter()
            .filter(|c| c.terrain == terrain)
            .map(Cell::hex)
            .collect()
    }

    #[must_use]
    pub fn count(&self, terrain: Terrain) -> usize {
        self.iter().filter(|c| c.terrain == terrain).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Меняет местность клетки. Для отсутствующей клетки ничего не делает.
    pub fn set_terrain(&mut self, q: i32, r: i32, terrain: Terrain) {
        if let Some(cell) = self.get_mut(q, r) {
            cell.terrain = terrain;
        }
    }

    /// Меняет цвет клетки. Для отсутствующей клетки ничего не делает.
    pub fn set_color(&mut self, q: i32, r: i32, color: Color) {
        if let Some(cell) = self.get_mut(q, r) {
            cell.color = color;
        }
    }

    /// Глубокая копия всех клеток в транспортной форме
    #[must_use]
    pub fn to_rows(&self) -> GridRows {
        self.rows.clone()
    }

    /// Восстанавливает поле из снимка без повторной генерации.
    ///
    /// # Ошибки
    /// Возвращает [`MapgenError::GridShape`], если число строк чётное, длина
    /// строки или координаты клетки не совпадают с шестиугольником.
    pub fn load(rows: GridRows) -> Result<Self, MapgenError> {
        if rows.len() % 2 == 0 {
            return Err(MapgenError::GridShape(format!(
                "ожидалось нечётное число строк, получено {}",
                rows.len()
            )));
        }
        if rows.len() > (2 * MAX_BOARD_RADIUS + 1) as usize {
            return Err(MapgenError::GridShape(format!(
                "слишком много строк: {}",
                rows.len()
            )));
        }
        let radius = ((rows.len() - 1) / 2) as i32;

        for (i, row) in rows.iter().enumerate() {
            let q = i as i32 - radius;
            let range = r_range(radius, q);
            let expected = (range.end() - range.start() + 1) as usize;
            if row.len() != expected {
                return Err(MapgenError::GridShape(format!(
                    "строка q={q}: ожидалось {expected} клеток, получено {}",
                    row.len()
                )));
            }
            for (cell, r) in row.iter().zip(range) {
                if cell.q != q || cell.r != r {
                    return Err(MapgenError::GridShape(format!(
                        "на месте ({q}, {r}) стоит клетка ({}, {})",
                        cell.q, cell.r
                    )));
                }
            }
        }

        Ok(Self { radius, rows })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<GridRows> for Grid {
    type Error = MapgenError;

    fn try_from(rows: GridRows) -> Result<Self, Self::Error> {
        Grid::load(rows)
    }
}

impl From<Grid> for GridRows {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::hex_distance;
    use std::collections::HashSet;

    #[test]
    fn standard_grid_has_127_unique_cells() {
        let grid = Grid::standard();
        assert_eq!(grid.len(), 127);
        assert_eq!(grid.dimensions(), (13, 13));

        let coords: HashSet<Hex> = grid.iter().map(Cell::hex).collect();
        assert_eq!(coords.len(), 127);
        for q in -8..=8 {
            for r in -8..=8 {
                let inside = hex_distance(Hex::ORIGIN, Hex::new(q, r)) <= BOARD_RADIUS;
                assert_eq!(coords.contains(&Hex::new(q, r)), inside, "({q}, {r})");
            }
        }
    }

    #[test]
    fn radius_is_clamped() {
        let grid = Grid::new(i32::MAX);
        assert_eq!(grid.radius(), MAX_BOARD_RADIUS);
        let side = (2 * MAX_BOARD_RADIUS + 1) as usize;
        assert_eq!(grid.dimensions(), (side, side));
        assert_eq!(Grid::new(-3).len(), 1);
    }

    #[test]
    fn get_returns_none_off_the_hexagon() {
        let grid = Grid::standard();
        assert!(grid.get(0, 0).is_some());
        assert!(grid.get(6, -6).is_some());
        assert!(grid.get(6, 1).is_none());
        assert!(grid.get(-7, 0).is_none());
        assert!(grid.get(i32::MAX, i32::MIN).is_none());
    }

    #[test]
    fn get_finds_the_requested_cell() {
        let grid = Grid::standard();
        let cell = grid.get(-2, 5).unwrap();
        assert_eq!((cell.q(), cell.r()), (-2, 5));
    }

    #[test]
    fn neighbors_omit_cells_off_the_board() {
        let grid = Grid::standard();
        assert_eq!(grid.neighbors(0, 0).len(), 6);
        assert_eq!(grid.neighbors(6, 0).len(), 3);
        assert_eq!(grid.neighbors(3, 3).len(), 4);
        assert!(grid.neighbors(20, 20).is_empty());
    }

    #[test]
    fn setters_ignore_missing_cells() {
        let mut grid = Grid::standard();
        let before = grid.clone();
        grid.set_color(9, 9, Color::Red);
        grid.set_terrain(9, 9, Terrain::City);
        assert_eq!(grid, before);

        grid.set_color(1, 1, Color::Blue);
        grid.set_terrain(1, 1, Terrain::Temple);
        let cell = grid.get(1, 1).unwrap();
        assert_eq!(cell.color(), Color::Blue);
        assert_eq!(cell.terrain(), Terrain::Temple);
        assert_eq!(grid.cells_by_terrain(Terrain::Temple).len(), 1);
    }

    #[test]
    fn rows_follow_the_axial_layout() {
        let rows = Grid::standard().to_rows();
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0].len(), 7);
        assert_eq!(rows[6].len(), 13);
        assert_eq!((rows[0][0].q(), rows[0][0].r()), (-6, 0));
        assert_eq!((rows[12][0].q(), rows[12][0].r()), (6, -6));
    }

    #[test]
    fn load_restores_terrain_and_color() {
        let mut grid = Grid::standard();
        grid.set_terrain(0, 0, Terrain::Zeus);
        grid.set_terrain(-3, 1, Terrain::Clouds);
        grid.set_color(-3, 1, Color::Pink);

        let json = serde_json::to_string(&grid.to_rows()).unwrap();
        let rows: GridRows = serde_json::from_str(&json).unwrap();
        let restored = Grid::load(rows).unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn load_rejects_malformed_rows() {
        let mut rows = Grid::standard().to_rows();
        rows[3].pop();
        assert!(matches!(Grid::load(rows), Err(MapgenError::GridShape(_))));

        let mut rows = Grid::standard().to_rows();
        rows.swap(0, 12);
        assert!(Grid::load(rows).is_err());

        assert!(Grid::load(Vec::new()).is_err());
    }
}
