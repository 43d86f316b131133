use std::{collections::BTreeMap, fmt, str::FromStr};

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use super::*;

/// Identifier for one of the topology generators.
///
/// Used in [`generate`] to select the generator and to derive the weight seed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// [`Grid`] without diagonals
    Grid,
    /// [`Maze`] with the default shortcut fraction
    Maze,
    /// [`RandomGeometric`] with the threshold radius
    Geometric,
    /// [`Hypercube`]
    Hypercube,
}

impl GraphKind {
    /// All kinds in suite order
    pub const ALL: [GraphKind; 4] = [
        GraphKind::Grid,
        GraphKind::Maze,
        GraphKind::Geometric,
        GraphKind::Hypercube,
    ];

    /// Offset added to the base seed when seeding the weight rng
    pub fn weight_seed_offset(&self) -> u64 {
        match self {
            GraphKind::Grid => 1,
            GraphKind::Maze => 2,
            GraphKind::Geometric => 3,
            GraphKind::Hypercube => 4,
        }
    }

    /// Seed of the weight rng: `seed + offset + n`, independent of the topology seed `seed`
    pub fn weight_seed(&self, seed: u64, n: NumNodes) -> u64 {
        seed.wrapping_add(self.weight_seed_offset())
            .wrapping_add(n as u64)
    }

    /// Builds the unweighted topology of this kind with default generator settings
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `n` is out of range for this kind.
    pub fn topology<R: Rng>(&self, n: NumNodes, rng: &mut R) -> Result<Topology> {
        match self {
            GraphKind::Grid => Grid::new().nodes(n).topology(rng),
            GraphKind::Maze => Maze::new().nodes(n).topology(rng),
            GraphKind::Geometric => RandomGeometric::new().nodes(n).topology(rng),
            GraphKind::Hypercube => Hypercube::new().nodes(n).topology(rng),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphKind::Grid => "grid",
            GraphKind::Maze => "maze",
            GraphKind::Geometric => "geometric",
            GraphKind::Hypercube => "hypercube",
        };
        f.pad(name)
    }
}

impl FromStr for GraphKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(GraphKind::Grid),
            "maze" => Ok(GraphKind::Maze),
            "geometric" | "random_geometric" => Ok(GraphKind::Geometric),
            "hypercube" => Ok(GraphKind::Hypercube),
            _ => Err(Error::InvalidParameter(format!("unknown graph kind: {s}"))),
        }
    }
}

/// Default base seed of [`GeneratorConfig`]
pub const DEFAULT_SEED: u64 = 1234;

/// Parameters shared by all kinds in [`generate`] and [`generate_suite`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub weights: WeightAssignment,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            weights: WeightAssignment::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a new config with default settings (seed 1234, weights uniform in `[1, 20]`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base seed
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Sets the base seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.set_seed(seed);
        self
    }

    /// Sets the weight assignment
    pub fn set_weights(&mut self, weights: WeightAssignment) {
        self.weights = weights;
    }

    /// Sets the weight assignment
    pub fn weights(mut self, weights: WeightAssignment) -> Self {
        self.set_weights(weights);
        self
    }
}

/// A generated graph: vertex labels, weighted undirected edges and [`Metadata`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedInstance {
    pub vertices: Vec<Node>,
    pub edges: Vec<WeightedEdge<Node, i64>>,
    pub metadata: Metadata,
}

impl WeightedInstance {
    /// Returns the number of vertices
    pub fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    /// Returns the number of (undirected) edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len()
    }

    /// Draws fresh weights for the same topology, keeping edge order
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if the weight assignment is misconfigured; the
    /// instance is left unchanged in that case.
    pub fn reweight<R: Rng>(&mut self, assignment: &WeightAssignment, rng: &mut R) -> Result<()> {
        let topology: Vec<Edge> = self
            .edges
            .iter()
            .map(|e| Edge(e.source, e.target))
            .collect();
        self.edges = assignment.assign(&topology, rng)?;
        Ok(())
    }
}

/// Generates a weighted instance of `kind` with (about) `n` vertices.
///
/// The topology is drawn from `Pcg64Mcg::seed_from_u64(config.seed)`, the weights from an
/// independent rng seeded with [`GraphKind::weight_seed`]. Identical arguments yield identical
/// instances.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] if `n` or the weight assignment are out of range.
pub fn generate(kind: GraphKind, n: NumNodes, config: &GeneratorConfig) -> Result<WeightedInstance> {
    let topology = kind.topology(n, &mut Pcg64Mcg::seed_from_u64(config.seed))?;
    let weight_rng = &mut Pcg64Mcg::seed_from_u64(kind.weight_seed(config.seed, n));
    let instance = topology.weighted(&config.weights, weight_rng)?;

    debug!(
        "generated {kind} with {} of {n} vertices and {} edges",
        instance.number_of_nodes(),
        instance.number_of_edges()
    );

    Ok(instance)
}

/// Generates every [`GraphKind`] for every size in `sizes`.
///
/// # Errors
/// Fails on the first instance that cannot be generated.
pub fn generate_suite<I>(
    sizes: I,
    config: &GeneratorConfig,
) -> Result<BTreeMap<GraphKind, BTreeMap<NumNodes, WeightedInstance>>>
where
    I: IntoIterator<Item = NumNodes>,
{
    let sizes: Vec<NumNodes> = sizes.into_iter().collect();

    let mut suite = BTreeMap::new();
    for kind in GraphKind::ALL {
        let instances = suite.entry(kind).or_insert_with(BTreeMap::new);
        for &n in &sizes {
            instances.insert(n, generate(kind, n, config)?);
        }
    }
    Ok(suite)
}
