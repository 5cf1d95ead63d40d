pub mod baseline;
pub mod drunken_walk;

use rand::SeedableRng;
use serde::Serialize;

use crate::board::Board;
use crate::config::{BoardGenerationParams, GeneratorKind};
use crate::grid::Grid;
use crate::placement::PlacementOutcome;
use crate::terrain::Terrain;

pub use drunken_walk::CityAttempt;

/// Что получилось за один проход генерации
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub generator: GeneratorKind,
    pub seed: u64,
    /// Сколько клеток каждого особого типа поставлено и где был недобор
    pub placement: PlacementOutcome,
    /// Попытки поставить города у вершин (только «пьяное блуждание»)
    pub cities: Vec<CityAttempt>,
    pub walker_steps: usize,
    pub repaired_cells: usize,
}

/// Генерирует поле по параметрам.
///
/// Один и тот же сид всегда даёт одно и то же поле.
#[must_use]
pub fn generate_grid(params: &BoardGenerationParams) -> (Grid, GenerationReport) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(params.seed);
    let mut grid = Grid::new(params.radius);

    let report = match params.generator {
        GeneratorKind::Baseline => baseline::generate(&mut grid, &params.targets, &mut rng),
        GeneratorKind::DrunkenWalk => drunken_walk::generate(&mut grid, params, &mut rng),
    };
    let report = GenerationReport {
        generator: params.generator,
        seed: params.seed,
        ..report
    };

    tracing::info!(
        generator = ?params.generator,
        seed = params.seed,
        cells = grid.len(),
        sea = grid.count(Terrain::Sea),
        shallow = grid.count(Terrain::Shallow),
        shortfalls = report.placement.shortfalls.len(),
        "поле сгенерировано"
    );

    (grid, report)
}

#[must_use]
pub fn generate_board(params: &BoardGenerationParams) -> Board {
    let (grid, report) = generate_grid(params);
    Board::generated(grid, report)
}
