use std::collections::HashSet;

use hexmapgen::generator::drunken_walk::{
    carve_sea, convert_coastal_land, convert_residual_land, initialize_land, repair_landlocked,
};
use hexmapgen::stats::{landlocked_cells, water_network_reaches_zeus};
use hexmapgen::{
    Board, BoardGenerationParams, Color, GeneratorKind, Grid, Hex, MapgenError, Terrain,
    hex_distance,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn params(generator: GeneratorKind, seed: u64) -> BoardGenerationParams {
    BoardGenerationParams {
        generator,
        ..BoardGenerationParams::with_seed(seed)
    }
}

const GENERATORS: [GeneratorKind; 2] = [GeneratorKind::Baseline, GeneratorKind::DrunkenWalk];

#[test]
fn every_board_covers_the_hexagon_exactly_once() {
    for generator in GENERATORS {
        for seed in 0..10 {
            let board = Board::generate(&params(generator, seed));
            let coords: Vec<Hex> = board.grid().iter().map(|c| c.hex()).collect();
            let unique: HashSet<Hex> = coords.iter().copied().collect();

            assert_eq!(coords.len(), 127);
            assert_eq!(unique.len(), 127);
            assert!(coords.iter().all(|h| hex_distance(*h, Hex::ORIGIN) <= 6));
        }
    }
}

#[test]
fn zeus_stays_in_the_center() {
    for generator in GENERATORS {
        for seed in 0..10 {
            let board = Board::generate(&params(generator, seed));
            assert_eq!(board.get_cell(0, 0).unwrap().terrain(), Terrain::Zeus);
            assert_eq!(board.cells_by_terrain(Terrain::Zeus).len(), 1);
            for ring in board.neighbors(0, 0) {
                assert_ne!(ring.terrain(), Terrain::Zeus);
            }
        }
    }
}

#[test]
fn sea_always_reaches_zeus() {
    for generator in GENERATORS {
        for seed in 0..10 {
            let board = Board::generate(&params(generator, seed));
            assert!(water_network_reaches_zeus(board.grid()), "{generator:?} seed {seed}");
        }
    }
}

#[test]
fn no_landlocked_tiles_after_repair_phase() {
    let settings = BoardGenerationParams::default().walk;
    for seed in 0..50 {
        let mut grid = Grid::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        initialize_land(&mut grid);
        carve_sea(&mut grid, &settings, &mut rng);
        repair_landlocked(&mut grid);
        assert!(landlocked_cells(&grid).is_empty(), "seed {seed}");

        // Последующие фазы только добавляют воду
        convert_residual_land(&mut grid, settings.residual_shallow_fraction, &mut rng);
        convert_coastal_land(&mut grid, settings.max_coastal_conversions, &mut rng);
        assert!(landlocked_cells(&grid).is_empty(), "seed {seed}");
    }
}

#[test]
fn placed_cities_sit_near_their_corners() {
    for seed in 0..25 {
        let board = Board::generate(&params(GeneratorKind::DrunkenWalk, seed));
        let report = board.report().unwrap();
        assert_eq!(report.cities.len(), 6);

        let directions: Vec<usize> = report.cities.iter().map(|a| a.direction).collect();
        assert_eq!(directions, vec![0, 1, 2, 3, 4, 5]);
        for attempt in &report.cities {
            if let Some(city) = attempt.placed_at {
                assert!(hex_distance(city, attempt.corner) <= 2);
            }
        }
    }
}

#[test]
fn finished_boards_have_no_landlocked_tiles() {
    for generator in GENERATORS {
        for seed in 0..60 {
            let board = Board::generate(&params(generator, seed));
            let stranded = landlocked_cells(board.grid());
            assert!(stranded.is_empty(), "{generator:?} seed {seed}: {stranded:?}");
        }
    }
}

#[test]
fn targets_are_never_exceeded() {
    for generator in GENERATORS {
        for seed in 0..10 {
            let p = params(generator, seed);
            let board = Board::generate(&p);
            let report = board.report().unwrap();
            let stats = board.stats();
            for (terrain, target) in p.targets.placement_order() {
                let placed = report.placement.placed.get(&terrain).copied().unwrap_or(0);
                assert!(placed <= target, "{generator:?} seed {seed}: {terrain}");
                assert_eq!(stats.count(terrain), placed, "{generator:?} seed {seed}: {terrain}");
            }
        }
    }
}

#[test]
fn snapshot_round_trip_preserves_terrain_and_color() {
    for generator in GENERATORS {
        let mut board = Board::generate(&params(generator, 8));
        board.set_cell_color(1, 2, Color::Red);
        board.set_cell_color(-4, 0, Color::Yellow);
        board.set_cell_color(40, 40, Color::Blue);

        let restored = Board::from_json(&board.to_json().unwrap()).unwrap();
        for cell in board.grid().iter() {
            let other = restored.get_cell(cell.q(), cell.r()).unwrap();
            assert_eq!(other, cell);
        }
        assert_eq!(restored.get_cell(-4, 0).unwrap().color(), Color::Yellow);
    }
}

#[test]
fn config_file_drives_generation() {
    let dir = std::env::temp_dir().join(format!("hexmapgen-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("board.toml");
    std::fs::write(
        &path,
        "seed = 12\ngenerator = \"baseline\"\n\n[targets]\nclouds = 2\nmonsters = 0\n",
    )
    .unwrap();

    let p = BoardGenerationParams::from_toml_file(&path).unwrap();
    let board = Board::generate(&p);
    assert_eq!(board.stats().count(Terrain::Clouds), 2);
    assert_eq!(board.stats().count(Terrain::Monsters), 0);
    assert_eq!(board.stats().count(Terrain::Sea), 6);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn oversized_radius_in_config_file_is_rejected() {
    let dir = std::env::temp_dir().join(format!("hexmapgen-radius-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("board.toml");
    std::fs::write(&path, "seed = 3\nradius = 100000\n").unwrap();

    let result = BoardGenerationParams::from_toml_file(&path);
    assert!(matches!(result, Err(MapgenError::InvalidConfig(_))));

    std::fs::remove_dir_all(&dir).unwrap();
}
