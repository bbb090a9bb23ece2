use crate::graph::model::OverlapGraph;
use crate::graph::overlap::is_followed_by;
use ahash::AHashSet;
use tracing::info;

/// Build the directed overlap graph over a k-mer set.
///
/// Every k-mer becomes a node; an edge `a -> b` is added for every ordered
/// pair of distinct k-mers whose (k-1)-suffix/prefix overlap. The scan is a
/// full pairwise comparison, quadratic in the k-mer count; no suffix map or
/// other index is built.
pub fn build_overlap_graph(kmers: &AHashSet<String>) -> OverlapGraph {
    let mut graph = OverlapGraph::new();

    for kmer in kmers {
        graph.add_node(kmer);
    }

    for a in kmers {
        for b in kmers {
            // Distinctness is by value: a homopolymer k-mer overlaps itself
            // by shape but never gets a self-loop.
            if a != b && is_followed_by(a, b) {
                graph.add_edge(a, b);
            }
        }
    }

    info!(
        "overlap graph built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    graph
}
