// src/generator/drunken_walk.rs
//! Генератор «пьяного блуждания»
//!
//! Всё поле, кроме центра, сначала считается сушей (временно помечается как
//! `Foundations`). Море выращивается ходоками, стартующими с шести клеток
//! вокруг центра, поэтому оно всегда связно и замкнутых озёр не бывает.
//! Дальше чинятся клетки без выхода к воде, часть суши превращается в
//! мелководье, у вершин шестиугольника ставятся города, расставляется
//! остальная особая местность, и в конце нетронутая временная суша
//! становится мелководьем.

use std::collections::{HashMap, VecDeque};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::{BoardGenerationParams, DrunkenWalkSettings};
use crate::generator::GenerationReport;
use crate::grid::Grid;
use crate::hex::{Hex, corner};
use crate::placement::{keeps_water_access, place_special_terrain};
use crate::terrain::Terrain;

/// Временная метка неразмеченной суши
const SCRATCH_LAND: Terrain = Terrain::Foundations;

/// Максимальное смещение города от вершины
const CITY_MAX_OFFSET: i32 = 2;

/// Попытка поставить город у одной вершины
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityAttempt {
    pub direction: usize,
    pub corner: Hex,
    /// Клетка, выбранная со случайным смещением от вершины
    pub candidate: Hex,
    /// Куда город в итоге встал (`None` — вершина пропущена)
    pub placed_at: Option<Hex>,
}

fn is_land(terrain: Terrain) -> bool {
    !matches!(terrain, Terrain::Sea | Terrain::Zeus)
}

fn land_count(grid: &Grid) -> usize {
    grid.iter().filter(|c| is_land(c.terrain())).count()
}

/// Шаг 1: все клетки, кроме центра, становятся неразмеченной сушей.
pub fn initialize_land(grid: &mut Grid) {
    let cells: Vec<Hex> = grid.iter().map(|c| c.hex()).collect();
    for hex in cells {
        if hex != Hex::ORIGIN {
            grid.set_terrain(hex.q, hex.r, SCRATCH_LAND);
        }
    }
}

/// Шаг 2: выращивает море от кольца вокруг центра.
///
/// На каждой итерации выбирается случайный активный ходок и делает шаг на
/// первую неразмеченную соседнюю клетку в случайном порядке направлений,
/// превращая её в море. Ходок без свободных соседей выбывает. Останавливается,
/// когда ходоков не осталось или суши стало не больше
/// [`DrunkenWalkSettings::land_target`].
///
/// Возвращает число сделанных шагов.
pub fn carve_sea<R: Rng + ?Sized>(
    grid: &mut Grid,
    settings: &DrunkenWalkSettings,
    rng: &mut R,
) -> usize {
    grid.set_terrain(0, 0, Terrain::Zeus);

    let mut walkers: Vec<Hex> = Hex::ORIGIN
        .neighbors()
        .filter(|&h| grid.contains(h))
        .collect();
    for w in &walkers {
        grid.set_terrain(w.q, w.r, Terrain::Sea);
    }

    let target = settings.land_target(grid.len());
    let mut land = land_count(grid);
    let mut steps = 0;
    let mut directions: [usize; 6] = [0, 1, 2, 3, 4, 5];

    while !walkers.is_empty() && land > target {
        let i = rng.gen_range(0..walkers.len());
        let here = walkers[i];
        directions.shuffle(rng);

        let next = directions
            .iter()
            .filter_map(|&d| here.neighbor(d))
            .find(|&h| grid.terrain_at(h) == Some(SCRATCH_LAND));

        if let Some(next) = next {
            grid.set_terrain(next.q, next.r, Terrain::Sea);
            walkers[i] = next;
            land -= 1;
            steps += 1;
        } else {
            walkers.swap_remove(i);
        }
    }

    tracing::debug!(
        steps,
        land,
        target,
        walkers_left = walkers.len(),
        "море выращено"
    );
    steps
}

fn touches_water(grid: &Grid, hex: Hex) -> bool {
    grid.neighbors(hex.q, hex.r)
        .iter()
        .any(|n| n.terrain().is_water())
}

/// Кратчайший путь от `start` до водной сети (без самой водной клетки)
fn path_to_water(grid: &Grid, start: Hex) -> Vec<Hex> {
    let mut parents: HashMap<Hex, Hex> = HashMap::new();
    let mut queue = VecDeque::new();
    parents.insert(start, start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors() {
            let Some(terrain) = grid.terrain_at(next) else {
                continue;
            };
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, current);
            if terrain.is_water() {
                let mut path = Vec::new();
                let mut step = current;
                while step != start {
                    path.push(step);
                    step = parents[&step];
                }
                path.push(start);
                return path;
            }
            queue.push_back(next);
        }
    }
    Vec::new()
}

/// Шаг 3: клетки суши без единого водного соседа становятся мелководьем.
///
/// Если после этого новая клетка мелководья всё ещё не касается воды,
/// мелководьем становится и кратчайший проход от неё к водной сети.
/// Возвращает число изменённых клеток.
pub fn repair_landlocked(grid: &mut Grid) -> usize {
    let mut converted = 0;

    loop {
        let view: &Grid = grid;
        let landlocked = view
            .iter()
            .map(|c| c.hex())
            .find(|&h| view.terrain_at(h).is_some_and(is_land) && !touches_water(view, h));
        let Some(start) = landlocked else {
            break;
        };

        let path = path_to_water(grid, start);
        if path.is_empty() {
            // На поле нет воды вообще
            break;
        }
        for hex in path {
            if grid.terrain_at(hex).is_some_and(|t| !t.is_water()) {
                grid.set_terrain(hex.q, hex.r, Terrain::Shallow);
                converted += 1;
            }
        }
    }

    tracing::debug!(converted, "отрезанная суша исправлена");
    converted
}

/// Шаг 4: случайная доля оставшейся суши становится мелководьем.
pub fn convert_residual_land<R: Rng + ?Sized>(
    grid: &mut Grid,
    fraction: f32,
    rng: &mut R,
) -> usize {
    let mut land = grid.hexes_by_terrain(SCRATCH_LAND);
    land.shuffle(rng);

    let take = ((land.len() as f32 * fraction).floor() as usize).min(land.len());
    for hex in &land[..take] {
        grid.set_terrain(hex.q, hex.r, Terrain::Shallow);
    }

    tracing::debug!(converted = take, remaining = land.len() - take, "суша разбавлена мелководьем");
    take
}

/// Шаг 5: до `cap` прибрежных клеток суши (соседствующих с морем) становятся мелководьем.
pub fn convert_coastal_land<R: Rng + ?Sized>(grid: &mut Grid, cap: usize, rng: &mut R) -> usize {
    let mut coastal: Vec<Hex> = grid
        .hexes_by_terrain(SCRATCH_LAND)
        .into_iter()
        .filter(|h| {
            grid.neighbors(h.q, h.r)
                .iter()
                .any(|n| n.terrain() == Terrain::Sea)
        })
        .collect();
    coastal.shuffle(rng);

    let take = cap.min(coastal.len());
    for hex in &coastal[..take] {
        grid.set_terrain(hex.q, hex.r, Terrain::Shallow);
    }

    tracing::debug!(converted = take, candidates = coastal.len(), "берег размыт");
    take
}

/// Шаг 6: по городу у каждой из шести вершин.
///
/// От вершины делается 0–2 шага вдоль направления, повёрнутого на +2 или +4.
/// Если там мелководье — ставится город, иначе город ставится на саму
/// вершину, если она мелководье. Иначе вершина пропускается. Клетка,
/// после застройки которой кто-то из соседей остался бы без воды
/// (см. [`keeps_water_access`]), считается неподходящей.
pub fn place_cities<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Vec<CityAttempt> {
    let mut attempts = Vec::with_capacity(6);

    for direction in 0..6 {
        let Some(corner_hex) = corner(direction, grid.radius()) else {
            continue;
        };
        let turn = if rng.gen_bool(0.5) { 2 } else { 4 };
        let steps = rng.gen_range(0..=CITY_MAX_OFFSET);
        let candidate = corner_hex
            .offset((direction + turn) % 6, steps)
            .unwrap_or(corner_hex);

        let view: &Grid = grid;
        let placed_at = [candidate, corner_hex].into_iter().find(|&h| {
            view.terrain_at(h) == Some(Terrain::Shallow) && keeps_water_access(h, view)
        });

        match placed_at {
            Some(hex) => grid.set_terrain(hex.q, hex.r, Terrain::City),
            None => tracing::warn!(
                direction,
                corner = ?corner_hex,
                candidate = ?candidate,
                "у вершины нет подходящего мелководья, город не поставлен"
            ),
        }

        attempts.push(CityAttempt {
            direction,
            corner: corner_hex,
            candidate,
            placed_at,
        });
    }

    attempts
}

/// Шаг 8: оставшаяся временная суша становится мелководьем.
///
/// `scratch` — клетки, помеченные временной сушей до расстановки особой
/// местности. Поставленные фундаменты в этот список не входят, поэтому на
/// готовом поле `Foundations` означает только настоящие фундаменты.
pub fn release_scratch_land(grid: &mut Grid, scratch: &[Hex]) -> usize {
    let mut released = 0;
    for hex in scratch {
        if grid.terrain_at(*hex) == Some(SCRATCH_LAND) {
            grid.set_terrain(hex.q, hex.r, Terrain::Shallow);
            released += 1;
        }
    }
    tracing::debug!(released, "временная суша сброшена в мелководье");
    released
}

pub fn generate<R: Rng + ?Sized>(
    grid: &mut Grid,
    params: &BoardGenerationParams,
    rng: &mut R,
) -> GenerationReport {
    initialize_land(grid);
    let walker_steps = carve_sea(grid, &params.walk, rng);
    let repaired_cells = repair_landlocked(grid);
    convert_residual_land(grid, params.walk.residual_shallow_fraction, rng);
    convert_coastal_land(grid, params.walk.max_coastal_conversions, rng);
    let cities = place_cities(grid, rng);

    // Города уже стоят, поэтому в общем списке их нет
    let order: Vec<_> = params
        .targets
        .placement_order()
        .into_iter()
        .filter(|(t, _)| *t != Terrain::City)
        .collect();
    let scratch = grid.hexes_by_terrain(SCRATCH_LAND);
    let mut placement = place_special_terrain(grid, &order, rng);
    release_scratch_land(grid, &scratch);
    let cities_placed = cities.iter().filter(|a| a.placed_at.is_some()).count();
    placement.placed.insert(Terrain::City, cities_placed);

    GenerationReport {
        placement,
        cities,
        walker_steps,
        repaired_cells,
        ..GenerationReport::default()
    }
}
