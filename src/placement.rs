// src/placement.rs
//! Правила расстановки особой местности
//!
//! Общие для обоих генераторов: кандидат проверяется по текущему состоянию
//! поля в момент назначения, поэтому каждая следующая установка видит
//! результат предыдущих.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::grid::Grid;
use crate::hex::Hex;
use crate::terrain::Terrain;

/// Недобор по одному типу местности
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub terrain: Terrain,
    pub target: usize,
    pub placed: usize,
}

/// Итог одного прохода расстановки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlacementOutcome {
    pub placed: BTreeMap<Terrain, usize>,
    pub shortfalls: Vec<Shortfall>,
}

/// Не отрежет ли превращение клетки `candidate` в сушу кого-нибудь от воды.
///
/// Сама клетка должна касаться воды (море, мелководье или центр), а у каждого
/// её существующего соседа должен остаться хотя бы один другой водный сосед.
#[must_use]
pub fn keeps_water_access(candidate: Hex, grid: &Grid) -> bool {
    let neighbors = grid.neighbors(candidate.q, candidate.r);
    if !neighbors.iter().any(|n| n.terrain().is_water()) {
        return false;
    }

    neighbors.iter().all(|n| {
        grid.neighbors(n.q(), n.r())
            .iter()
            .any(|nn| nn.hex() != candidate && nn.terrain().is_water())
    })
}

/// Можно ли превратить клетку `candidate` в особую местность.
///
/// Условия:
/// - клетка сейчас мелководье;
/// - клетка не соседствует с центром (`Zeus`) или городом;
/// - выполняется [`keeps_water_access`].
#[must_use]
pub fn is_valid_placement(candidate: Hex, grid: &Grid) -> bool {
    if grid.terrain_at(candidate) != Some(Terrain::Shallow) {
        return false;
    }

    let neighbors = grid.neighbors(candidate.q, candidate.r);
    if neighbors
        .iter()
        .any(|n| matches!(n.terrain(), Terrain::Zeus | Terrain::City))
    {
        return false;
    }

    keeps_water_access(candidate, grid)
}

/// Расставляет особую местность по списку `(тип, цель)` в заданном порядке.
///
/// Все клетки мелководья перемешиваются один раз (Фишер–Йейтс), затем для
/// каждого типа жадно берутся подходящие клетки из перемешанного списка,
/// пока цель не достигнута или список не кончился. Клетка, занятая одним
/// типом, для следующих уже не подходит. Недобор пишется в лог и в итог,
/// но ошибкой не считается.
pub fn place_special_terrain<R: Rng + ?Sized>(
    grid: &mut Grid,
    order: &[(Terrain, usize)],
    rng: &mut R,
) -> PlacementOutcome {
    let mut pool = grid.hexes_by_terrain(Terrain::Shallow);
    pool.shuffle(rng);

    let mut outcome = PlacementOutcome::default();

    for &(terrain, target) in order {
        let mut placed = 0;
        for &hex in &pool {
            if placed >= target {
                break;
            }
            if is_valid_placement(hex, grid) {
                grid.set_terrain(hex.q, hex.r, terrain);
                placed += 1;
            }
        }

        tracing::debug!(%terrain, target, placed, pool = pool.len(), "размещение местности");
        if placed < target {
            tracing::warn!(
                %terrain,
                target,
                placed,
                "не хватило подходящих клеток, тип размещён не полностью"
            );
            outcome.shortfalls.push(Shortfall {
                terrain,
                target,
                placed,
            });
        }
        *outcome.placed.entry(terrain).or_insert(0) += placed;
    }

    outcome
}
