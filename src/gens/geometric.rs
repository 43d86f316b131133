/*!
# Random Geometric Graph

Samples `n` points uniformly in the unit square and connects every pair whose Euclidean distance is
at most a radius `r`. All `n (n - 1) / 2` pairs are evaluated.

Unless set explicitly, the radius is `1.5 * sqrt(ln(n) / (pi * n))`, i.e. `1.5` times the
connectivity threshold of random geometric graphs. This makes a single component very likely
without guaranteeing it. A radius of `0` is valid and yields no edges.
*/

use std::f64::consts::PI;

use super::*;

/// Factor applied to the connectivity threshold for the default radius
pub const DEFAULT_RADIUS_FACTOR: f64 = 1.5;

/// Radius of a [`RandomGeometric`]-Generator can be set manually or derived from `n`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum GeometricRadius {
    /// `DEFAULT_RADIUS_FACTOR * sqrt(ln(n) / (pi * n))`
    #[default]
    Threshold,
    /// Radius defined manually
    Radius(f64),
}

/// A point in the unit square
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Samples a point uniformly from `[0, 1)^2`
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let x = rng.random();
        let y = rng.random();
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`
    pub fn squared_distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Random geometric graph generator in the unit square.
#[derive(Debug, Copy, Clone, Default)]
pub struct RandomGeometric {
    n: NumNodes,
    radius: GeometricRadius,
}

impl RandomGeometric {
    /// Creates a new generator with default settings (`n = 0`, threshold radius)
    pub fn new() -> Self {
        Self::default()
    }

    /// Manually sets the connection radius
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = GeometricRadius::Radius(radius);
    }

    /// Manually sets the connection radius
    pub fn radius(mut self, radius: f64) -> Self {
        self.set_radius(radius);
        self
    }

    /// Returns the radius used for `n` points
    pub fn effective_radius(&self) -> f64 {
        match self.radius {
            GeometricRadius::Radius(r) => r,
            GeometricRadius::Threshold => threshold_radius(self.n),
        }
    }

    /// Samples the points of the graph; point `i` belongs to the vertex labelled `i + 1`
    pub fn sample_points<R: Rng>(&self, rng: &mut R) -> Vec<Point> {
        (0..self.n).map(|_| Point::sample(rng)).collect()
    }
}

/// `DEFAULT_RADIUS_FACTOR * sqrt(ln(n) / (pi * n))`, where `ln(n)` is taken as `ln(2)` for `n < 2`
pub fn threshold_radius(n: NumNodes) -> f64 {
    let n = n.max(1) as f64;
    DEFAULT_RADIUS_FACTOR * (n.max(2.0).ln() / (PI * n)).sqrt()
}

impl NumNodesGen for RandomGeometric {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl TopologyGenerator for RandomGeometric {
    fn topology<R>(&self, rng: &mut R) -> Result<Topology>
    where
        R: Rng,
    {
        invalid_unless!(self.n >= 1, "a geometric graph needs at least one vertex");
        let radius = self.effective_radius();
        invalid_unless!(
            radius.is_finite() && radius >= 0.0,
            "radius must be finite and non-negative, got {radius}"
        );

        let points = self.sample_points(rng);
        let r2 = radius * radius;

        let mut edges = Vec::new();
        if radius > 0.0 {
            for (i, p) in points.iter().enumerate() {
                for (j, q) in points.iter().enumerate().skip(i + 1) {
                    if p.squared_distance(q) <= r2 {
                        edges.push(Edge(i as Node, j as Node));
                    }
                }
            }
        }

        let mut topology = Topology::from_nodes(self.n, self.n, edges);
        topology.metadata.radius = Some(radius);
        Ok(topology)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn zero_radius_has_no_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        for n in [1, 2, 10, 100, 500] {
            let graph = RandomGeometric::new().nodes(n).radius(0.0).topology(rng).unwrap();
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.metadata.radius, Some(0.0));
        }
    }

    #[test]
    fn large_radius_is_complete() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let graph = RandomGeometric::new().nodes(20).radius(1.5).topology(rng).unwrap();
        assert_eq!(graph.number_of_edges(), 20 * 19 / 2);
    }

    #[test]
    fn edges_respect_radius() {
        let generator = RandomGeometric::new().nodes(60).radius(0.2);
        let points = generator.sample_points(&mut Pcg64Mcg::seed_from_u64(3));
        let graph = generator.topology(&mut Pcg64Mcg::seed_from_u64(3)).unwrap();

        for (i, p) in points.iter().enumerate() {
            for (j, q) in points.iter().enumerate().skip(i + 1) {
                let expected = p.squared_distance(q) <= 0.2 * 0.2;
                let present = graph.edges.contains(&Edge(i as Node + 1, j as Node + 1));
                assert_eq!(expected, present);
            }
        }
    }

    #[test]
    fn default_radius() {
        assert!((threshold_radius(100) - 1.5 * (100f64.ln() / (PI * 100.0)).sqrt()).abs() < 1e-12);
        assert_eq!(threshold_radius(1), threshold_radius(0));
        assert!(threshold_radius(1).is_finite());

        // expected average degree is `2.25 * ln(n)`, minus boundary effects
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let graph = RandomGeometric::new().nodes(500).topology(rng).unwrap();
        assert!(graph.number_of_edges() > 2 * 500);
    }

    #[test]
    fn invalid_radius() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        for r in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                RandomGeometric::new().nodes(10).radius(r).topology(rng),
                Err(Error::InvalidParameter(_))
            ));
        }
        assert!(RandomGeometric::new().topology(rng).is_err());
    }
}
