pub mod board;
pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod hex;
pub mod placement;
pub mod stats;
pub mod terrain;

pub use board::Board;
pub use config::{BoardGenerationParams, DrunkenWalkSettings, GeneratorKind, TerrainTargets};
pub use error::MapgenError;
pub use generator::{GenerationReport, generate_board, generate_grid};
pub use grid::{Cell, Grid, GridRows};
pub use hex::{BOARD_RADIUS, Hex, MAX_BOARD_RADIUS, adjacent, corner, hex_distance};
pub use placement::{is_valid_placement, keeps_water_access, place_special_terrain};
pub use terrain::{Color, Terrain};
