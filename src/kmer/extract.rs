use ahash::AHashSet;
use std::io;

pub type Kmer = String;

/// Extract the deduplicated set of k-length substrings from a list of reads.
///
/// Every read of length >= k contributes all of its length-k windows (step 1);
/// shorter reads are skipped. Duplicate k-mers across reads collapse to a
/// single entry.
///
/// `k` greater than the configured read length is an input-contract violation
/// and is reported as an error, as are `k == 0` and an empty read list.
pub fn extract_kmers(reads: &[String], read_len: usize, k: usize) -> io::Result<AHashSet<Kmer>> {
    if k == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "k-mer length must be positive",
        ));
    }

    if k > read_len {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("k-mer length {} exceeds read length {}", k, read_len),
        ));
    }

    if reads.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no reads supplied",
        ));
    }

    let mut kmers = AHashSet::new();

    for read in reads {
        if read.len() < k {
            continue;
        }

        for i in 0..=read.len() - k {
            kmers.insert(read[i..i + k].to_string());
        }
    }

    Ok(kmers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_all_windows() {
        let reads = vec!["ATGGA".to_string()];
        let kmers = extract_kmers(&reads, 5, 3).unwrap();

        let expected: AHashSet<String> = ["ATG", "TGG", "GGA"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(kmers, expected);
    }

    #[test]
    fn test_duplicates_collapse_across_reads() {
        let reads = vec!["ATGG".to_string(), "ATGC".to_string()];
        let kmers = extract_kmers(&reads, 4, 3).unwrap();

        // "ATG" appears in both reads but is stored once
        let expected: AHashSet<String> = ["ATG", "TGG", "TGC"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(kmers, expected);
    }

    #[test]
    fn test_short_reads_skipped() {
        let reads = vec!["ATGGA".to_string(), "AT".to_string()];
        let kmers = extract_kmers(&reads, 5, 3).unwrap();

        assert_eq!(kmers.len(), 3);
        assert!(!kmers.contains("AT"));
    }

    #[test]
    fn test_k_exceeding_read_length_is_rejected() {
        let reads = vec!["ATGGA".to_string()];
        let err = extract_kmers(&reads, 5, 6).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_zero_k_is_rejected() {
        let reads = vec!["ATGGA".to_string()];
        assert!(extract_kmers(&reads, 5, 0).is_err());
    }

    #[test]
    fn test_empty_read_list_is_rejected() {
        let reads: Vec<String> = vec![];
        assert!(extract_kmers(&reads, 5, 3).is_err());
    }

    #[test]
    fn test_read_exactly_k_long_yields_itself() {
        let reads = vec!["ATG".to_string()];
        let kmers = extract_kmers(&reads, 3, 3).unwrap();
        assert_eq!(kmers.len(), 1);
        assert!(kmers.contains("ATG"));
    }
}
