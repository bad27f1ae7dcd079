//! graphkit - A weighted graph toolkit implemented in Rust
//!
//! This crate provides an adjacency-list graph with 1-based vertex ids and the
//! standard traversal and optimization algorithms over it: depth/breadth-first
//! traversal, single-source and all-pairs shortest paths, minimum spanning forests
//! (Kruskal and Prim) and topological ordering of directed graphs.
//!
//! ```
//! use graphkit::graph::Graph;
//!
//! let mut graph = Graph::new(4, 4);
//! graph.add(1, 2, 1).unwrap();
//! graph.add(2, 3, 2).unwrap();
//! graph.add(1, 3, 5).unwrap();
//! graph.add(3, 4, 1).unwrap();
//!
//! let paths = graph.shortest_paths(1).unwrap();
//! assert_eq!(paths.distance(4).unwrap(), Some(4));
//! assert_eq!(paths.path_to(4).unwrap(), Some(vec![1, 2, 3, 4]));
//! ```

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::core::{Edge, GraphError, GraphResult, Vertex, Weight};
pub use crate::graph::{DirectedGraph, Graph};
