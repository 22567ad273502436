//! Fluent API for building AdjacencyGraph instances.

use crate::config::GraphConfig;
use crate::types::VertexId;

use super::AdjacencyGraph;

enum Step<V> {
    Vertex(V),
    Edge { from: V, to: V, directed: bool },
}

/// Fluent builder for constructing an AdjacencyGraph.
///
/// Steps are replayed in call order by [`build`](Self::build), so the
/// result is identical to making the same calls on the graph directly.
pub struct GraphBuilder<V: VertexId> {
    config: GraphConfig,
    steps: Vec<Step<V>>,
}

impl<V: VertexId> GraphBuilder<V> {
    /// Create a new builder with the default config.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder with a specific config.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            steps: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.steps.push(Step::Vertex(vertex));
        self
    }

    /// Add an undirected edge.
    pub fn edge(&mut self, a: V, b: V) -> &mut Self {
        self.steps.push(Step::Edge {
            from: a,
            to: b,
            directed: false,
        });
        self
    }

    /// Add a directed edge.
    pub fn arc(&mut self, from: V, to: V) -> &mut Self {
        self.steps.push(Step::Edge {
            from,
            to,
            directed: true,
        });
        self
    }

    /// Add an undirected path through the given vertices.
    pub fn path<I: IntoIterator<Item = V>>(&mut self, vertices: I) -> &mut Self {
        let mut iter = vertices.into_iter();
        let Some(mut prev) = iter.next() else {
            return self;
        };
        self.steps.push(Step::Vertex(prev.clone()));
        for next in iter {
            self.edge(prev, next.clone());
            prev = next;
        }
        self
    }

    /// Build the final AdjacencyGraph.
    pub fn build(self) -> AdjacencyGraph<V> {
        let mut graph = AdjacencyGraph::with_config(self.config);
        for step in self.steps {
            match step {
                Step::Vertex(v) => graph.add_vertex(v),
                Step::Edge { from, to, directed } => graph.add_edge(from, to, directed),
            }
        }
        graph
    }
}

impl<V: VertexId> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
