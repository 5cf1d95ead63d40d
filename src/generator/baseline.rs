// src/generator/baseline.rs
//! Базовый генератор: кольцо моря вокруг центра, всё остальное мелководье,
//! затем расстановка особой местности.

use rand::Rng;

use crate::config::TerrainTargets;
use crate::generator::GenerationReport;
use crate::grid::Grid;
use crate::hex::Hex;
use crate::placement::place_special_terrain;
use crate::terrain::Terrain;

/// Центр — `Zeus`, шесть клеток вокруг — море, остальные — мелководье.
pub fn seed_terrain(grid: &mut Grid) {
    let cells: Vec<Hex> = grid.iter().map(|c| c.hex()).collect();
    for hex in cells {
        let terrain = match hex.distance_to(Hex::ORIGIN) {
            0 => Terrain::Zeus,
            1 => Terrain::Sea,
            _ => Terrain::Shallow,
        };
        grid.set_terrain(hex.q, hex.r, terrain);
    }
}

pub fn generate<R: Rng + ?Sized>(
    grid: &mut Grid,
    targets: &TerrainTargets,
    rng: &mut R,
) -> GenerationReport {
    seed_terrain(grid);
    tracing::debug!(
        shallow = grid.count(Terrain::Shallow),
        "базовая разметка готова"
    );

    let placement = place_special_terrain(grid, &targets.placement_order(), rng);

    GenerationReport {
        placement,
        ..GenerationReport::default()
    }
}
