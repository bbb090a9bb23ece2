use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use velour::cli_main::{Cli, Commands};
use velour::io::source::{load_source, SourceFormat};
use velour::pipeline::assemble::{run_assembly, AssembleOptions};
use velour::stats::calculate_stats;

/// Sample sequence assembled when no source file is given.
const DEMO_SEQUENCE: &str = "ATGGAAGTCGCGGAATC";

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Assemble {
            file,
            read_len,
            num_reads,
            k,
            seed,
            compat_overlap,
            max_passes,
            output,
            dot_before,
            dot_after,
        } => {
            let source = match file {
                Some(args) => {
                    let loaded = SourceFormat::from_name(&args[1])
                        .and_then(|format| load_source(&args[0], format));
                    match loaded {
                        Ok(sequence) => sequence,
                        Err(e) => {
                            eprintln!("Error loading source sequence: {}", e);
                            std::process::exit(1);
                        }
                    }
                }
                None => DEMO_SEQUENCE.to_string(),
            };

            info!("assembling {} bp source, k = {}", source.len(), k);
            let start = std::time::Instant::now();

            let opts = AssembleOptions {
                read_len,
                num_reads,
                k,
                seed,
                compat_overlap,
                max_passes,
                output,
                dot_before,
                dot_after,
            };

            match run_assembly(&source, &opts) {
                Ok(outcome) => {
                    println!("Sequence: {}", source);
                    println!("Coverage: {:.2}", outcome.coverage);
                    println!(
                        "Assembled {} contigs from {} reads ({} k-mers, {} merges):",
                        outcome.contigs.len(),
                        outcome.reads_kept,
                        outcome.kmer_count,
                        outcome.report.merges
                    );
                    for contig in &outcome.contigs {
                        println!("\t{}", contig);
                    }
                    println!("Assembly completed in {:.2}s", start.elapsed().as_secs_f32());
                }
                Err(e) => {
                    eprintln!("Error during assembly: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Stats { input, format } => {
            info!("Calculating assembly statistics for: {}", input);

            let stats = match calculate_stats(&input) {
                Ok(stats) => stats,
                Err(e) => {
                    eprintln!("Error reading assembly: {}", e);
                    std::process::exit(1);
                }
            };

            match format.as_str() {
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&stats).unwrap());
                }
                "tsv" => {
                    println!("contigs\ttotal_len\tavg_len\tn50");
                    println!(
                        "{}\t{}\t{:.2}\t{}",
                        stats.total_contigs, stats.total_length, stats.average_length, stats.n50
                    );
                }
                _ => {
                    println!("Contigs: {}", stats.total_contigs);
                    println!("Total length: {}", stats.total_length);
                    println!("Average length: {:.2}", stats.average_length);
                    println!("N50: {}", stats.n50);
                }
            }
        }
    }
}
