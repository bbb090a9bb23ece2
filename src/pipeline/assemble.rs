use crate::graph::build::build_overlap_graph;
use crate::graph::contract::{AssemblyReport, ChainContractor, OverlapMode};
use crate::io::fasta::FastaWriter;
use crate::kmer::extract::extract_kmers;
use crate::sim::{sample_reads, sampling_rng};
use crate::stats::coverage;
use crate::visualize::dot::write_dot;
use std::error::Error;
use tracing::info;

pub struct AssembleOptions {
    pub read_len: usize,
    pub num_reads: usize,
    pub k: usize,
    /// RNG seed for reproducible read sampling.
    pub seed: Option<u64>,
    /// Use the legacy longest-common-substring merge rule instead of the
    /// anchored (k-1) junction.
    pub compat_overlap: bool,
    pub max_passes: usize,
    /// Optional contig FASTA(.gz) output.
    pub output: Option<String>,
    /// Optional DOT dumps of the graph before and after contraction.
    pub dot_before: Option<String>,
    pub dot_after: Option<String>,
}

pub struct AssemblyOutcome {
    pub reads_kept: usize,
    pub coverage: f64,
    pub kmer_count: usize,
    pub report: AssemblyReport,
    /// Final node set of the contracted graph, sorted for stable output.
    pub contigs: Vec<String>,
}

/// Fragment the source into reads, build the k-mer overlap graph, contract
/// it, and hand back the surviving contigs.
pub fn run_assembly(
    source: &str,
    opts: &AssembleOptions,
) -> Result<AssemblyOutcome, Box<dyn Error>> {
    let mut rng = sampling_rng(opts.seed);

    let reads = sample_reads(source, opts.read_len, opts.num_reads, opts.k, &mut rng);
    let cov = coverage(source.len(), &reads, opts.num_reads);
    info!("sampled {} reads, coverage {:.2}x", reads.len(), cov);

    let kmers = extract_kmers(&reads, opts.read_len, opts.k)?;
    info!("extracted {} distinct {}-mers", kmers.len(), opts.k);

    let mut graph = build_overlap_graph(&kmers);

    if let Some(path) = &opts.dot_before {
        write_dot(&graph, path)?;
        info!("initial graph written to {}", path);
    }

    let mode = if opts.compat_overlap {
        OverlapMode::LongestCommon
    } else {
        OverlapMode::Anchored(opts.k - 1)
    };
    let report = ChainContractor::new(mode)
        .with_max_passes(opts.max_passes)
        .assemble(&mut graph)?;

    if let Some(path) = &opts.dot_after {
        write_dot(&graph, path)?;
        info!("contracted graph written to {}", path);
    }

    let mut contigs = graph.nodes();
    contigs.sort();

    if let Some(path) = &opts.output {
        let mut writer = FastaWriter::new(path)?;
        for (id, contig) in contigs.iter().enumerate() {
            writer.write_contig(id, contig)?;
        }
        info!("{} contigs written to {}", contigs.len(), path);
    }

    Ok(AssemblyOutcome {
        reads_kept: reads.len(),
        coverage: cov,
        kmer_count: kmers.len(),
        report,
        contigs,
    })
}
