// src/stats.rs
//! Сводки и проверки готового поля для диагностики
use std::collections::{BTreeMap, HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;
use serde::Serialize;

use crate::grid::Grid;
use crate::hex::Hex;
use crate::terrain::Terrain;

/// Общее число клеток и число клеток каждого типа
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerrainStats {
    pub total: usize,
    pub counts: BTreeMap<Terrain, usize>,
}

impl TerrainStats {
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut counts: BTreeMap<Terrain, usize> =
            Terrain::ALL.into_iter().map(|t| (t, 0)).collect();
        for cell in grid.iter() {
            *counts.entry(cell.terrain()).or_insert(0) += 1;
        }
        Self {
            total: grid.len(),
            counts,
        }
    }

    #[must_use]
    pub fn count(&self, terrain: Terrain) -> usize {
        self.counts.get(&terrain).copied().unwrap_or(0)
    }
}

/// Клетки вне моря и центра, у которых нет ни одного водного соседа
#[must_use]
pub fn landlocked_cells(grid: &Grid) -> Vec<Hex> {
    grid.iter()
        .filter(|c| !matches!(c.terrain(), Terrain::Sea | Terrain::Zeus))
        .filter(|c| {
            !grid
                .neighbors(c.q(), c.r())
                .iter()
                .any(|n| n.terrain().is_water())
        })
        .map(|c| c.hex())
        .collect()
}

/// Граф водной сети: вершины — клетки моря, мелководья и центра, рёбра — соседство
pub fn build_water_graph(grid: &Grid) -> (UnGraph<Hex, ()>, HashMap<Hex, NodeIndex>) {
    let mut graph = UnGraph::new_undirected();
    let mut nodes = HashMap::new();

    for cell in grid.iter().filter(|c| c.terrain().is_water()) {
        nodes.insert(cell.hex(), graph.add_node(cell.hex()));
    }

    for (&hex, &node) in &nodes {
        // Каждое ребро добавляется один раз: только «вперёд» по трём направлениям
        for direction in 0..3 {
            if let Some(next) = hex.neighbor(direction).and_then(|h| nodes.get(&h)) {
                graph.add_edge(node, *next, ());
            }
        }
    }

    (graph, nodes)
}

/// Клетки моря, от которых нельзя доплыть до центра по воде
#[must_use]
pub fn unreachable_sea_cells(grid: &Grid) -> Vec<Hex> {
    let (graph, nodes) = build_water_graph(grid);
    let sea = grid.hexes_by_terrain(Terrain::Sea);

    let Some(&zeus) = nodes.get(&Hex::ORIGIN) else {
        return sea;
    };

    let mut reached = HashSet::new();
    let mut bfs = Bfs::new(&graph, zeus);
    while let Some(node) = bfs.next(&graph) {
        reached.insert(graph[node]);
    }

    sea.into_iter().filter(|h| !reached.contains(h)).collect()
}

/// Всё море связано с центром через воду
#[must_use]
pub fn water_network_reaches_zeus(grid: &Grid) -> bool {
    grid.terrain_at(Hex::ORIGIN) == Some(Terrain::Zeus) && unreachable_sea_cells(grid).is_empty()
}
