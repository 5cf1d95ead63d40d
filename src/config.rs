// src/config.rs
//! Конфигурация генерации поля
//!
//! Этот модуль определяет все параметры, управляющие генерацией:
//! - Выбор генератора (базовый или «пьяное блуждание»)
//! - Целевое количество клеток каждого особого типа
//! - Параметры выращивания моря
//!
//! Все структуры поддерживают сериализацию в TOML/JSON для удобной настройки через конфигурационные файлы.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::MapgenError;
use crate::hex::{BOARD_RADIUS, MAX_BOARD_RADIUS};
use crate::terrain::Terrain;

/// Вариант генератора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Кольцо моря вокруг центра, остальное мелководье
    Baseline,
    /// Море выращивается блуждающими «ходоками» от кольца вокруг центра
    #[default]
    DrunkenWalk,
}

/// Целевое количество клеток каждого особого типа
///
/// Это цели, а не гарантии: при нехватке подходящих клеток тип размещается частично.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainTargets {
    #[serde(default = "default_cubes")]
    pub cubes: usize,
    #[serde(default = "default_temple")]
    pub temple: usize,
    #[serde(default = "default_foundations")]
    pub foundations: usize,
    #[serde(default = "default_monsters")]
    pub monsters: usize,
    #[serde(default = "default_clouds")]
    pub clouds: usize,
    #[serde(default = "default_city")]
    pub city: usize,
}

fn default_cubes() -> usize {
    6
}
fn default_temple() -> usize {
    6
}
fn default_foundations() -> usize {
    6
}
fn default_monsters() -> usize {
    9
}
fn default_clouds() -> usize {
    12
}
fn default_city() -> usize {
    6
}

impl Default for TerrainTargets {
    fn default() -> Self {
        Self {
            cubes: 6,
            temple: 6,
            foundations: 6,
            monsters: 9,
            clouds: 12,
            city: 6,
        }
    }
}

impl TerrainTargets {
    /// Цель для конкретного типа; для неособых типов — `None`
    #[must_use]
    pub fn target(&self, terrain: Terrain) -> Option<usize> {
        match terrain {
            Terrain::Cubes => Some(self.cubes),
            Terrain::Temple => Some(self.temple),
            Terrain::Foundations => Some(self.foundations),
            Terrain::Monsters => Some(self.monsters),
            Terrain::Clouds => Some(self.clouds),
            Terrain::City => Some(self.city),
            Terrain::Zeus | Terrain::Sea | Terrain::Shallow => None,
        }
    }

    /// Порядок расстановки: кубы, храмы, фундаменты, монстры, облака, города
    #[must_use]
    pub fn placement_order(&self) -> Vec<(Terrain, usize)> {
        vec![
            (Terrain::Cubes, self.cubes),
            (Terrain::Temple, self.temple),
            (Terrain::Foundations, self.foundations),
            (Terrain::Monsters, self.monsters),
            (Terrain::Clouds, self.clouds),
            (Terrain::City, self.city),
        ]
    }
}

/// Параметры генератора «пьяного блуждания»
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrunkenWalkSettings {
    /// Базовая доля суши от общего числа клеток
    #[serde(default = "default_land_fraction")]
    pub land_fraction: f32,

    /// Какая часть базовой суши остаётся после выращивания моря.
    /// Ходоки останавливаются, когда клеток суши не больше
    /// `floor(land_retention × floor(total × land_fraction))`.
    #[serde(default = "default_land_retention")]
    pub land_retention: f32,

    /// Доля оставшейся суши, превращаемой в мелководье
    #[serde(default = "default_residual_shallow_fraction")]
    pub residual_shallow_fraction: f32,

    /// Сколько прибрежных клеток суши можно дополнительно превратить в мелководье
    #[serde(default = "default_max_coastal_conversions")]
    pub max_coastal_conversions: usize,
}

fn default_land_fraction() -> f32 {
    0.6
}
fn default_land_retention() -> f32 {
    0.85
}
fn default_residual_shallow_fraction() -> f32 {
    0.5
}
fn default_max_coastal_conversions() -> usize {
    10
}

impl Default for DrunkenWalkSettings {
    fn default() -> Self {
        Self {
            land_fraction: 0.6,
            land_retention: 0.85,
            residual_shallow_fraction: 0.5,
            max_coastal_conversions: 10,
        }
    }
}

impl DrunkenWalkSettings {
    /// Порог числа клеток суши, на котором выращивание моря останавливается
    ///
    /// # Примеры
    /// ```
    /// use hexmapgen::config::DrunkenWalkSettings;
    /// assert_eq!(DrunkenWalkSettings::default().land_target(127), 64);
    /// ```
    #[must_use]
    pub fn land_target(&self, total_cells: usize) -> usize {
        let base = (total_cells as f32 * self.land_fraction).floor();
        (base * self.land_retention).floor() as usize
    }
}

/// Основные параметры генерации поля
///
/// Полная конфигурация для генерации одного поля. Поддерживает загрузку из TOML-файлов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardGenerationParams {
    /// Сид генератора случайных чисел (детерминированная генерация)
    pub seed: u64,

    /// Радиус шестиугольного поля (по умолчанию 6 → 127 клеток)
    #[serde(default = "default_radius")]
    pub radius: i32,

    /// Вариант генератора (по умолчанию `drunken_walk`)
    #[serde(default)]
    pub generator: GeneratorKind,

    /// Целевое количество особых клеток
    #[serde(default)]
    pub targets: TerrainTargets,

    /// Настройки «пьяного блуждания»
    #[serde(default)]
    pub walk: DrunkenWalkSettings,
}

fn default_radius() -> i32 {
    BOARD_RADIUS
}

impl BoardGenerationParams {
    /// Параметры по умолчанию с заданным сидом
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Загружает параметры из TOML-файла
    ///
    /// # Аргументы
    /// * `path` - путь к файлу конфигурации в формате TOML
    ///
    /// # Ошибки
    /// Возвращает ошибку, если файл не найден или содержит недопустимый формат.
    ///
    /// # Пример
    /// ```toml
    /// # board.toml
    /// seed = 42
    /// generator = "baseline"
    ///
    /// [targets]
    /// clouds = 10
    /// ```
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, MapgenError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, MapgenError> {
        let params: Self = toml::from_str(contents)?;
        params.validate()?;
        Ok(params)
    }

    /// Проверяет, что радиус и доли лежат в допустимых границах
    ///
    /// # Ошибки
    /// [`MapgenError::InvalidConfig`] с описанием первого нарушения.
    pub fn validate(&self) -> Result<(), MapgenError> {
        if !(1..=MAX_BOARD_RADIUS).contains(&self.radius) {
            return Err(MapgenError::InvalidConfig(format!(
                "radius = {} вне диапазона 1..={MAX_BOARD_RADIUS}",
                self.radius
            )));
        }
        let fractions = [
            ("walk.land_fraction", self.walk.land_fraction),
            ("walk.land_retention", self.walk.land_retention),
            (
                "walk.residual_shallow_fraction",
                self.walk.residual_shallow_fraction,
            ),
        ];
        for (name, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(MapgenError::InvalidConfig(format!(
                    "{name} = {value} вне диапазона 0..=1"
                )));
            }
        }
        Ok(())
    }
}

impl Default for BoardGenerationParams {
    fn default() -> Self {
        Self {
            seed: 0,
            radius: BOARD_RADIUS,
            generator: GeneratorKind::DrunkenWalk,
            targets: TerrainTargets::default(),
            walk: DrunkenWalkSettings::default(),
        }
    }
}
