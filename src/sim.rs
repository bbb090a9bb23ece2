//! Random fragmentation of a source sequence into reads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

/// Build an RNG for read sampling, seeded for reproducible experiments when
/// a seed is given.
pub fn sampling_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Cut one fragment of at most `frag_len` symbols from a random position.
///
/// The start index is drawn from `[-frag_len / 2, seq_len - 1]`; a negative
/// draw is clamped to the start of the sequence with the fragment shortened
/// by the overhang, and a draw near the end is truncated at the sequence
/// boundary. Fragments at either edge are therefore shorter than `frag_len`,
/// mimicking partial reads off the ends of the molecule.
pub fn fragment_read(seq: &str, frag_len: usize, rng: &mut impl Rng) -> String {
    let overhang = (frag_len / 2) as isize;
    let ind = rng.gen_range(-overhang..seq.len() as isize);

    let (start, len) = if ind < 0 {
        (0, (frag_len as isize + ind) as usize)
    } else {
        (ind as usize, frag_len)
    };

    let end = (start + len).min(seq.len());
    seq[start..end].to_string()
}

/// Sample up to `num_reads` fragments of the source, keeping only those
/// strictly longer than `k` symbols.
///
/// Fewer than `num_reads` reads come back when edge draws produce fragments
/// of length <= k; callers decide whether that coverage is acceptable.
pub fn sample_reads(
    seq: &str,
    read_len: usize,
    num_reads: usize,
    k: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut reads = Vec::with_capacity(num_reads);

    for _ in 0..num_reads {
        let read = fragment_read(seq, read_len, rng);
        if read.len() > k {
            reads.push(read);
        }
    }

    if reads.len() < num_reads {
        warn!(
            "kept {} of {} sampled reads (rest shorter than k + 1)",
            reads.len(),
            num_reads
        );
    }

    reads
}
