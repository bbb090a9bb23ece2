use ahash::AHashMap;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

/// Directed graph over sequence strings.
///
/// Nodes are interned sequences: each distinct string value maps to exactly
/// one vertex id, so inserting a sequence that is already present is a no-op.
/// Edges mean "target is a valid successor of source". All mutation goes
/// through this structure; no policy lives here.
pub struct OverlapGraph {
    graph: DiGraphMap<usize, ()>,
    ids: AHashMap<String, usize>,
    seqs: AHashMap<usize, String>,
    next_id: usize,
}

impl OverlapGraph {
    pub fn new() -> Self {
        OverlapGraph {
            graph: DiGraphMap::new(),
            ids: AHashMap::new(),
            seqs: AHashMap::new(),
            next_id: 0,
        }
    }

    /// Insert a sequence as a node. Idempotent: re-inserting an existing
    /// sequence returns the id it already holds.
    pub fn add_node(&mut self, seq: &str) -> usize {
        if let Some(&id) = self.ids.get(seq) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.ids.insert(seq.to_string(), id);
        self.seqs.insert(id, seq.to_string());
        self.graph.add_node(id);
        id
    }

    /// Insert a directed edge between two existing nodes. No-op when either
    /// endpoint is absent (callers insert nodes first) or when the endpoints
    /// are the same sequence (self-loops are never stored).
    pub fn add_edge(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }

        let (from_id, to_id) = match (self.ids.get(from), self.ids.get(to)) {
            (Some(&f), Some(&t)) => (f, t),
            _ => return,
        };

        self.graph.add_edge(from_id, to_id, ());
    }

    /// Remove a node and every edge where it is source or target.
    pub fn remove_node(&mut self, seq: &str) {
        if let Some(id) = self.ids.remove(seq) {
            self.seqs.remove(&id);
            self.graph.remove_node(id);
        }
    }

    pub fn contains(&self, seq: &str) -> bool {
        self.ids.contains_key(seq)
    }

    /// Sequences with an edge from `seq`. Order is not significant.
    pub fn successors(&self, seq: &str) -> Vec<String> {
        self.neighbors(seq, Direction::Outgoing)
    }

    /// Sequences with an edge to `seq`. Order is not significant.
    pub fn predecessors(&self, seq: &str) -> Vec<String> {
        self.neighbors(seq, Direction::Incoming)
    }

    fn neighbors(&self, seq: &str, dir: Direction) -> Vec<String> {
        match self.ids.get(seq) {
            Some(&id) => self
                .graph
                .neighbors_directed(id, dir)
                .map(|n| self.seqs[&n].clone())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn out_degree(&self, seq: &str) -> usize {
        self.degree(seq, Direction::Outgoing)
    }

    pub fn in_degree(&self, seq: &str) -> usize {
        self.degree(seq, Direction::Incoming)
    }

    fn degree(&self, seq: &str, dir: Direction) -> usize {
        match self.ids.get(seq) {
            Some(&id) => self.graph.neighbors_directed(id, dir).count(),
            None => 0,
        }
    }

    /// Nodes with zero in-degree and zero out-degree.
    pub fn isolates(&self) -> Vec<String> {
        self.graph
            .nodes()
            .filter(|&id| {
                self.graph
                    .neighbors_directed(id, Direction::Incoming)
                    .count()
                    == 0
                    && self
                        .graph
                        .neighbors_directed(id, Direction::Outgoing)
                        .count()
                        == 0
            })
            .map(|id| self.seqs[&id].clone())
            .collect()
    }

    /// Remove every isolated node, returning how many were dropped.
    pub fn remove_isolates(&mut self) -> usize {
        let isolates = self.isolates();
        for seq in &isolates {
            self.remove_node(seq);
        }
        isolates.len()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Snapshot of the current node sequences.
    pub fn nodes(&self) -> Vec<String> {
        self.graph.nodes().map(|id| self.seqs[&id].clone()).collect()
    }

    /// Snapshot of the current edges as (source, target) sequence pairs.
    pub fn edges(&self) -> Vec<(String, String)> {
        self.graph
            .all_edges()
            .map(|(from, to, _)| (self.seqs[&from].clone(), self.seqs[&to].clone()))
            .collect()
    }
}

impl Default for OverlapGraph {
    fn default() -> Self {
        Self::new()
    }
}
