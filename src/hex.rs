// src/hex.rs
//! Геометрия шестиугольной сетки в осевых координатах
//!
//! Третья кубическая координата `s = -q - r` нигде не хранится и выводится
//! только при расчёте расстояния.

use serde::{Deserialize, Serialize};

/// Радиус стандартного игрового поля
pub const BOARD_RADIUS: i32 = 6;

/// Наибольший допустимый радиус поля
pub const MAX_BOARD_RADIUS: i32 = 32;

/// Смещения шести соседей в осевых координатах.
///
/// Порядок единый для всего крейта: направление `d` и `(d + 3) % 6`
/// всегда противоположны.
pub const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Осевая координата клетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex { q: 0, r: 0 };

    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Кубическая координата `s`
    #[must_use]
    pub const fn s(self) -> i32 {
        -self.q - self.r
    }

    #[must_use]
    pub fn distance_to(self, other: Hex) -> i32 {
        hex_distance(self, other)
    }

    /// Соседняя клетка в направлении `direction` (или `None`, если направление вне `0..6`)
    #[must_use]
    pub fn neighbor(self, direction: usize) -> Option<Hex> {
        adjacent(self.q, self.r, direction)
    }

    /// Сдвиг на `steps` клеток в направлении `direction`
    #[must_use]
    pub fn offset(self, direction: usize, steps: i32) -> Option<Hex> {
        let (dq, dr) = DIRECTIONS.get(direction)?;
        Some(Hex::new(self.q + dq * steps, self.r + dr * steps))
    }

    /// Все шесть соседей, включая лежащих за пределами поля
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        DIRECTIONS
            .iter()
            .map(move |&(dq, dr)| Hex::new(self.q + dq, self.r + dr))
    }
}

impl From<(i32, i32)> for Hex {
    fn from((q, r): (i32, i32)) -> Self {
        Hex::new(q, r)
    }
}

/// Расстояние между клетками в шагах: `(|Δq| + |Δr| + |Δq + Δr|) / 2`
///
/// # Примеры
/// ```
/// use hexmapgen::hex::{Hex, hex_distance};
/// assert_eq!(hex_distance(Hex::ORIGIN, Hex::new(1, 0)), 1);
/// assert_eq!(hex_distance(Hex::ORIGIN, Hex::new(2, -1)), 2);
/// ```
#[must_use]
pub fn hex_distance(a: Hex, b: Hex) -> i32 {
    let dq = a.q - b.q;
    let dr = a.r - b.r;
    (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
}

/// Координата соседа клетки `(q, r)` в направлении `direction`.
///
/// Принадлежность результата полю не проверяется. Для направления вне
/// диапазона `0..=5` возвращает `None`.
#[must_use]
pub fn adjacent(q: i32, r: i32, direction: usize) -> Option<Hex> {
    Hex::new(q, r).offset(direction, 1)
}

/// Вершина шестиугольника радиуса `radius` в направлении `direction`
#[must_use]
pub fn corner(direction: usize, radius: i32) -> Option<Hex> {
    Hex::ORIGIN.offset(direction, radius)
}
