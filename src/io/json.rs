//! # Flat JSON export
//!
//! A [`WeightedInstance`] is exported as
//!
//! ```text
//! { "vertices": [1, 2, 3], "edges": [[1, 2, 5], [2, 3, 1]] }
//! ```
//!
//! Metadata is not part of the flat shape. Reading yields a [`FlatGraph`] that can be loaded
//! into a [`LabeledGraph`] with either directedness.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    diagnostics::Diagnostics,
    error::*,
    gens::WeightedInstance,
    prelude::*,
};

/// Vertex labels and weighted edges of a flat document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatGraph {
    pub vertices: Vec<Node>,
    pub edges: Vec<WeightedEdge<Node, i64>>,
}

#[derive(Serialize)]
struct FlatView<'a> {
    vertices: &'a [Node],
    edges: &'a [WeightedEdge<Node, i64>],
}

impl<'a> From<&'a WeightedInstance> for FlatView<'a> {
    fn from(instance: &'a WeightedInstance) -> Self {
        Self {
            vertices: &instance.vertices,
            edges: &instance.edges,
        }
    }
}

impl From<&WeightedInstance> for FlatGraph {
    fn from(instance: &WeightedInstance) -> Self {
        Self {
            vertices: instance.vertices.clone(),
            edges: instance.edges.clone(),
        }
    }
}

impl FlatGraph {
    /// Loads the document into a container; see [`LabeledGraph::from_parts`]
    pub fn to_graph(&self, directed: bool) -> (LabeledGraph<Node, i64>, Diagnostics<Node>) {
        LabeledGraph::from_parts(
            self.vertices.iter().copied(),
            self.edges.iter().copied(),
            directed,
        )
    }

    /// Reads a flat document from a file
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be opened and [`Error::Json`] if it is malformed.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        read_json(BufReader::new(File::open(path)?))
    }
}

/// Writes the flat document of `instance` to `writer`
///
/// # Errors
/// Returns [`Error::Json`] if writing fails.
pub fn write_json<W: Write>(instance: &WeightedInstance, writer: W) -> Result<()> {
    serde_json::to_writer(writer, &FlatView::from(instance))?;
    Ok(())
}

/// Returns the flat document of `instance`
///
/// # Errors
/// Returns [`Error::Json`] if serialization fails.
pub fn to_json_string(instance: &WeightedInstance) -> Result<String> {
    Ok(serde_json::to_string(&FlatView::from(instance))?)
}

/// Reads a flat document. Unknown fields (such as exported metadata) are ignored.
///
/// # Errors
/// Returns [`Error::Json`] if the input is not a valid flat document.
pub fn read_json<R: Read>(reader: R) -> Result<FlatGraph> {
    Ok(serde_json::from_reader(reader)?)
}

impl WeightedInstance {
    /// Writes the flat document to the file at `path`, replacing it if it exists
    ///
    /// # Errors
    /// Returns [`Error::Io`] or [`Error::Json`] if the file cannot be written.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        write_json(self, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gens::{GeneratorConfig, GraphKind, generate};

    #[test]
    fn flat_shape() {
        let instance = generate(GraphKind::Grid, 4, &GeneratorConfig::default()).unwrap();
        let json = to_json_string(&instance).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(value["vertices"], serde_json::json!([1, 2, 3, 4]));

        let edges = value["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0][0], 1);
        assert_eq!(edges[0][1], 2);
        assert_eq!(edges[0][2], instance.edges[0].weight);
    }

    #[test]
    fn read_back() {
        let instance = generate(GraphKind::Hypercube, 20, &GeneratorConfig::default()).unwrap();

        let mut buffer = Vec::new();
        write_json(&instance, &mut buffer).unwrap();
        let flat = read_json(buffer.as_slice()).unwrap();
        assert_eq!(flat, FlatGraph::from(&instance));

        let (graph, diagnostics) = flat.to_graph(false);
        assert!(diagnostics.is_empty());
        assert_eq!(graph.number_of_nodes(), instance.vertices.len());
        assert_eq!(graph.number_of_edges(), 2 * instance.edges.len());
    }

    #[test]
    fn full_instance_is_a_flat_document() {
        let instance = generate(GraphKind::Maze, 9, &GeneratorConfig::default()).unwrap();
        let with_metadata = serde_json::to_string(&instance).unwrap();

        let flat = read_json(with_metadata.as_bytes()).unwrap();
        assert_eq!(flat, FlatGraph::from(&instance));
    }

    #[test]
    fn malformed_input() {
        assert!(matches!(
            read_json(r#"{"vertices": [1], "edges": [[1, 2]]}"#.as_bytes()),
            Err(Error::Json(_))
        ));
        assert!(read_json("".as_bytes()).is_err());
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("maze.json");

        let instance = generate(GraphKind::Maze, 30, &GeneratorConfig::default()).unwrap();
        instance.save_json(&path).unwrap();

        assert_eq!(FlatGraph::load_json(&path).unwrap(), FlatGraph::from(&instance));
        assert!(matches!(
            FlatGraph::load_json(dir.path().join("missing.json")),
            Err(Error::Io(_))
        ));
    }
}
