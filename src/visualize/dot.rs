use crate::graph::model::OverlapGraph;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Render the graph's current node and edge sets as Graphviz DOT.
///
/// Output is sorted so the same graph always renders the same file.
pub fn render_dot(graph: &OverlapGraph) -> String {
    let mut out = String::from("digraph overlap {\n");

    let mut nodes = graph.nodes();
    nodes.sort();
    for node in &nodes {
        out.push_str(&format!("    \"{}\";\n", node));
    }

    let mut edges = graph.edges();
    edges.sort();
    for (from, to) in &edges {
        out.push_str(&format!("    \"{}\" -> \"{}\";\n", from, to));
    }

    out.push_str("}\n");
    out
}

/// Write the DOT rendering to a file for `dot -Tpng` and friends.
pub fn write_dot(graph: &OverlapGraph, path: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_dot(graph).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_node_and_edge() {
        let mut graph = OverlapGraph::new();
        graph.add_node("ATG");
        graph.add_node("TGG");
        graph.add_node("CCC");
        graph.add_edge("ATG", "TGG");

        let dot = render_dot(&graph);

        assert!(dot.starts_with("digraph overlap {"));
        assert!(dot.contains("\"ATG\";"));
        assert!(dot.contains("\"CCC\";"));
        assert!(dot.contains("\"ATG\" -> \"TGG\";"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut a = OverlapGraph::new();
        let mut b = OverlapGraph::new();
        for node in ["ATG", "TGG", "GGA"] {
            a.add_node(node);
        }
        for node in ["GGA", "ATG", "TGG"] {
            b.add_node(node);
        }
        a.add_edge("ATG", "TGG");
        b.add_edge("ATG", "TGG");

        assert_eq!(render_dot(&a), render_dot(&b));
    }
}
