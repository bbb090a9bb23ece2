use crate::graph::model::OverlapGraph;
use crate::graph::overlap::{anchored_overlap, longest_common_match};
use std::io;
use tracing::{debug, info};

pub const DEFAULT_MAX_PASSES: usize = 512;

/// How two chain neighbors are matched up when their sequences are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapMode {
    /// Merge only across a true suffix/prefix junction of this length
    /// (k - 1 for a graph built over k-mers). A rewired edge that no longer
    /// satisfies the junction simply ends that chain walk.
    Anchored(usize),
    /// Legacy behavior: align on the longest common
    /// substring of the pair, wherever it falls. An internal repeat longer
    /// than the true junction produces a mis-join; kept behind this switch
    /// for reproducing old outputs.
    LongestCommon,
}

/// Counters from one `assemble` invocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssemblyReport {
    pub passes: usize,
    pub merges: usize,
    pub isolates_removed: usize,
}

/// Contracts unbranched chains of the overlap graph into single nodes.
pub struct ChainContractor {
    mode: OverlapMode,
    max_passes: usize,
}

impl ChainContractor {
    pub fn new(mode: OverlapMode) -> Self {
        ChainContractor {
            mode,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Replace the pass ceiling. Every merge removes a node, so a converging
    /// run never comes near the default; the ceiling turns a pathological
    /// input into an error instead of a hang.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Contract the graph in place until a full pass performs no merge.
    /// The surviving node set is the assembly result (the contigs).
    ///
    /// Each pass iterates over a snapshot of the node set taken at pass
    /// start; nodes merged away mid-pass are detected and skipped. From any
    /// node the walk keeps merging downstream while the node has exactly one
    /// successor and that successor has exactly one predecessor, so branch
    /// points and their neighbors are left untouched.
    pub fn assemble(&self, graph: &mut OverlapGraph) -> io::Result<AssemblyReport> {
        let mut report = AssemblyReport::default();

        report.isolates_removed = graph.remove_isolates();
        if report.isolates_removed > 0 {
            debug!("dropped {} isolated nodes", report.isolates_removed);
        }

        loop {
            let before = graph.node_count();

            if report.passes == self.max_passes {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!(
                        "contraction did not converge after {} passes",
                        self.max_passes
                    ),
                ));
            }
            report.passes += 1;

            for seed in graph.nodes() {
                let mut word = seed;

                loop {
                    if !graph.contains(&word) {
                        break;
                    }
                    if graph.out_degree(&word) != 1 {
                        break;
                    }
                    let follower = match graph.successors(&word).pop() {
                        Some(follower) => follower,
                        None => break,
                    };
                    if graph.in_degree(&follower) != 1 {
                        break;
                    }
                    let merged = match self.join(&word, &follower) {
                        Some(merged) => merged,
                        None => break,
                    };

                    // Rewire before removal: the merged node inherits the
                    // follower's successors and the word's predecessors.
                    let children = graph.successors(&follower);
                    let parents = graph.predecessors(&word);

                    graph.add_node(&merged);
                    for child in &children {
                        graph.add_edge(&merged, child);
                    }
                    for parent in &parents {
                        graph.add_edge(parent, &merged);
                    }

                    graph.remove_node(&word);
                    graph.remove_node(&follower);

                    report.merges += 1;
                    word = merged;
                }
            }

            let unresolved = before - graph.node_count();
            if unresolved == 0 {
                break;
            }
        }

        info!(
            "contraction finished: {} passes, {} merges, {} contigs",
            report.passes,
            report.merges,
            graph.node_count()
        );

        Ok(report)
    }

    /// Join two chain neighbors into one sequence, or `None` when the pair
    /// does not merge under the current mode.
    fn join(&self, word: &str, follower: &str) -> Option<String> {
        match self.mode {
            OverlapMode::Anchored(overlap) => {
                if anchored_overlap(word, follower, overlap) {
                    Some(format!("{}{}", word, &follower[overlap..]))
                } else {
                    None
                }
            }
            OverlapMode::LongestCommon => {
                let m = longest_common_match(follower, word);
                Some(format!(
                    "{}{}",
                    &word[..m.word_offset + m.len],
                    &follower[m.follower_offset + m.len..]
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build::build_overlap_graph;
    use ahash::AHashSet;

    fn graph_of(kmers: &[&str]) -> OverlapGraph {
        let set: AHashSet<String> = kmers.iter().map(|s| s.to_string()).collect();
        build_overlap_graph(&set)
    }

    fn sorted_nodes(graph: &OverlapGraph) -> Vec<String> {
        let mut nodes = graph.nodes();
        nodes.sort();
        nodes
    }

    #[test]
    fn test_clean_chain_contracts_to_single_contig() {
        let mut graph = graph_of(&["ATG", "TGG", "GGA"]);

        let report = ChainContractor::new(OverlapMode::Anchored(2))
            .assemble(&mut graph)
            .unwrap();

        assert_eq!(sorted_nodes(&graph), vec!["ATGGA".to_string()]);
        assert_eq!(report.merges, 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_longest_common_mode_matches_on_clean_chain() {
        let mut graph = graph_of(&["ATG", "TGG", "GGA"]);

        ChainContractor::new(OverlapMode::LongestCommon)
            .assemble(&mut graph)
            .unwrap();

        assert_eq!(sorted_nodes(&graph), vec!["ATGGA".to_string()]);
    }

    #[test]
    fn test_branch_point_is_preserved() {
        let mut graph = graph_of(&["ATG", "TGG", "TGC"]);

        let report = ChainContractor::new(OverlapMode::Anchored(2))
            .assemble(&mut graph)
            .unwrap();

        // "ATG" forks to "TGG" and "TGC": no merge is legal anywhere
        assert_eq!(
            sorted_nodes(&graph),
            vec!["ATG".to_string(), "TGC".to_string(), "TGG".to_string()]
        );
        assert_eq!(report.merges, 0);
        assert_eq!(graph.out_degree("ATG"), 2);
    }

    #[test]
    fn test_isolates_are_removed_before_contraction() {
        let mut graph = graph_of(&["ATG", "TGG", "CCC"]);

        let report = ChainContractor::new(OverlapMode::Anchored(2))
            .assemble(&mut graph)
            .unwrap();

        assert_eq!(report.isolates_removed, 1);
        assert_eq!(sorted_nodes(&graph), vec!["ATGG".to_string()]);
    }

    #[test]
    fn test_longer_chain_reassembles_source() {
        let mut graph = graph_of(&["ATG", "TGG", "GGA", "GAA", "AAG"]);

        ChainContractor::new(OverlapMode::Anchored(2))
            .assemble(&mut graph)
            .unwrap();

        assert_eq!(sorted_nodes(&graph), vec!["ATGGAAG".to_string()]);
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let mut graph = graph_of(&["ATG", "TGG", "GGA"]);
        let contractor = ChainContractor::new(OverlapMode::Anchored(2));

        contractor.assemble(&mut graph).unwrap();
        let second = contractor.assemble(&mut graph).unwrap();

        assert_eq!(second.merges, 0);
        assert_eq!(second.passes, 1);
        assert_eq!(sorted_nodes(&graph), vec!["ATGGA".to_string()]);
    }

    #[test]
    fn test_empty_graph_terminates() {
        let mut graph = OverlapGraph::new();

        let report = ChainContractor::new(OverlapMode::Anchored(2))
            .assemble(&mut graph)
            .unwrap();

        assert_eq!(report.merges, 0);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_pass_ceiling_reports_error() {
        let mut graph = graph_of(&["ATG", "TGG", "GGA"]);

        let err = ChainContractor::new(OverlapMode::Anchored(2))
            .with_max_passes(0)
            .assemble(&mut graph)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::Other);
    }

    #[test]
    fn test_cycle_is_left_unmerged_when_every_node_branches() {
        // "AA" repeated: kmers of "AAA..." collapse to one node with no
        // self-loop, which the isolate sweep removes.
        let mut graph = graph_of(&["AAA"]);

        let report = ChainContractor::new(OverlapMode::Anchored(2))
            .assemble(&mut graph)
            .unwrap();

        assert_eq!(report.isolates_removed, 1);
        assert_eq!(graph.node_count(), 0);
    }
}
