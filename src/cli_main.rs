use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "Velour", version, about = "Naive de novo genome assembler", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fragment a source sequence into reads and assemble contigs
    Assemble {
        /// Source sequence file and its format ('txt', 'fasta', or 'fastq');
        /// a built-in demo sequence is used when omitted
        #[arg(short, long, num_args = 2, value_names = ["FILEPATH", "FORMAT"])]
        file: Option<Vec<String>>,

        /// Length of sampled reads
        #[arg(short = 'l', long, default_value_t = 8)]
        read_len: usize,

        /// Number of reads to sample
        #[arg(short = 'n', long, default_value_t = 40)]
        num_reads: usize,

        /// K-mer length
        #[arg(short, long, default_value_t = 4)]
        k: usize,

        /// RNG seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Merge on the longest common substring instead of the anchored
        /// (k-1) junction, reproducing the legacy merge behavior
        #[arg(long)]
        compat_overlap: bool,

        /// Maximum number of contraction passes before giving up
        #[arg(long, default_value_t = 512)]
        max_passes: usize,

        /// Output FASTA(.gz) file for contigs
        #[arg(short, long)]
        output: Option<String>,

        /// Write the graph before contraction as Graphviz DOT
        #[arg(long)]
        dot_before: Option<String>,

        /// Write the graph after contraction as Graphviz DOT
        #[arg(long)]
        dot_after: Option<String>,
    },

    /// Summarize the contigs in an assembly FASTA
    Stats {
        /// Input FASTA(.gz) file
        #[arg(short, long)]
        input: String,

        /// Output format: text, json, or tsv
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}
