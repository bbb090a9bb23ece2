use crate::io::fasta::{open_fasta, read_all_sequences};
use serde::Serialize;
use std::io;

#[derive(Debug, Serialize)]
pub struct Stats {
    pub total_contigs: usize,
    pub total_length: usize,
    pub average_length: f64,
    pub n50: usize,
}

/// Coverage of the source by a read set: reads sampled times the ratio of
/// mean read length to source length. `num_reads` is the requested sample
/// count, which may exceed the reads actually kept.
pub fn coverage(seq_len: usize, reads: &[String], num_reads: usize) -> f64 {
    if reads.is_empty() || seq_len == 0 {
        return 0.0;
    }

    let avg_read_len =
        reads.iter().map(|r| r.len()).sum::<usize>() as f64 / reads.len() as f64;

    num_reads as f64 * (avg_read_len / seq_len as f64)
}

/// Summarize a set of contig sequences.
pub fn contig_stats<S: AsRef<str>>(contigs: &[S]) -> Stats {
    let mut lengths: Vec<usize> = contigs.iter().map(|c| c.as_ref().len()).collect();
    lengths.sort_unstable();

    let total: usize = lengths.iter().sum();
    let total_contigs = lengths.len();
    let avg = if total_contigs > 0 {
        total as f64 / total_contigs as f64
    } else {
        0.0
    };

    // N50: length of the shortest contig in the minimal set covering half
    // the total assembly length
    let mut acc = 0;
    let half_total = total / 2;
    let n50 = lengths
        .iter()
        .rev()
        .find(|&&len| {
            acc += len;
            acc >= half_total
        })
        .copied()
        .unwrap_or(0);

    Stats {
        total_contigs,
        total_length: total,
        average_length: avg,
        n50,
    }
}

/// Summarize an assembly FASTA file.
pub fn calculate_stats(path: &str) -> io::Result<Stats> {
    let reader = open_fasta(path)?;
    let sequences = read_all_sequences(reader)?;
    Ok(contig_stats(&sequences))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_coverage_arithmetic() {
        let reads = vec!["ATGG".to_string(), "GAAGTC".to_string()];
        // mean read length 5, source length 10, 4 reads requested
        let cov = coverage(10, &reads, 4);
        assert!((cov - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_coverage_of_empty_read_set_is_zero() {
        assert_eq!(coverage(10, &[], 4), 0.0);
    }

    #[test]
    fn test_contig_stats() {
        let contigs = vec!["A".repeat(10), "A".repeat(30), "A".repeat(60)];
        let stats = contig_stats(&contigs);

        assert_eq!(stats.total_contigs, 3);
        assert_eq!(stats.total_length, 100);
        assert!((stats.average_length - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.n50, 60);
    }

    #[test]
    fn test_stats_on_empty_assembly() {
        let stats = contig_stats::<String>(&[]);
        assert_eq!(stats.total_contigs, 0);
        assert_eq!(stats.n50, 0);
    }

    #[test]
    fn test_calculate_stats_from_fasta() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, ">contig_0\nATGGA\n>contig_1\nATGGAAGTCG\n").unwrap();

        let stats = calculate_stats(file.path().to_str().unwrap()).unwrap();
        assert_eq!(stats.total_contigs, 2);
        assert_eq!(stats.total_length, 15);
        assert_eq!(stats.n50, 10);
    }
}
