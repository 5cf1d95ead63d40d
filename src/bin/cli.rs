use clap::{Parser, ValueEnum};
use hexmapgen::stats::{landlocked_cells, water_network_reaches_zeus};
use hexmapgen::{Board, BoardGenerationParams, GeneratorKind, Terrain};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GeneratorArg {
    Baseline,
    DrunkenWalk,
}

impl From<GeneratorArg> for GeneratorKind {
    fn from(arg: GeneratorArg) -> Self {
        match arg {
            GeneratorArg::Baseline => GeneratorKind::Baseline,
            GeneratorArg::DrunkenWalk => GeneratorKind::DrunkenWalk,
        }
    }
}

/// Генератор шестиугольного игрового поля
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Сид генерации (перекрывает значение из конфигурации; без него берётся случайный)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Вариант генератора (перекрывает значение из конфигурации)
    #[arg(short, long, value_enum)]
    generator: Option<GeneratorArg>,

    /// Путь для сохранения снимка поля в JSON (по умолчанию: ./board.json)
    #[arg(short, long, default_value = "board.json")]
    output: PathBuf,

    /// Загрузить готовый снимок вместо генерации
    #[arg(short, long, conflicts_with_all = ["config", "seed", "generator"])]
    load: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let board = if let Some(path) = &cli.load {
        tracing::info!(?path, "загрузка снимка поля");
        Board::from_json(&fs::read_to_string(path)?)?
    } else {
        let mut params = match &cli.config {
            Some(path) => {
                tracing::info!(?path, "загрузка конфигурации");
                BoardGenerationParams::from_toml_file(path)?
            }
            None => BoardGenerationParams::with_seed(rand::random()),
        };
        if let Some(seed) = cli.seed {
            params.seed = seed;
        }
        if let Some(generator) = cli.generator {
            params.generator = generator.into();
        }

        tracing::info!(
            seed = params.seed,
            generator = ?params.generator,
            radius = params.radius,
            "генерация поля"
        );
        let board = Board::generate(&params);

        tracing::info!(?cli.output, "сохранение снимка");
        fs::write(&cli.output, board.to_json()?)?;
        board
    };

    let stats = board.stats();
    let (width, height) = board.dimensions();
    println!("Поле {width}×{height}, клеток: {}", stats.total);
    for terrain in Terrain::ALL {
        println!("  {:<12} {}", terrain.name(), stats.count(terrain));
    }

    if let Some(report) = board.report() {
        for shortfall in &report.placement.shortfalls {
            println!(
                "  недобор {}: {} из {}",
                shortfall.terrain, shortfall.placed, shortfall.target
            );
        }
    }

    let landlocked = landlocked_cells(board.grid());
    println!("Клеток без выхода к воде: {}", landlocked.len());
    println!(
        "Море связано с центром: {}",
        if water_network_reaches_zeus(board.grid()) { "да" } else { "нет" }
    );

    println!("\nГотово!");
    Ok(())
}
