use crate::io::{fasta, fastq};
use std::fs;
use std::io;

/// Supported source-sequence formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Txt,
    Fasta,
    Fastq,
}

impl SourceFormat {
    pub fn from_name(name: &str) -> io::Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "txt" => Ok(SourceFormat::Txt),
            "fasta" | "fa" => Ok(SourceFormat::Fasta),
            "fastq" | "fq" => Ok(SourceFormat::Fastq),
            other => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unsupported source format: {}", other),
            )),
        }
    }
}

/// Load the source sequence to be fragmented and reassembled.
///
/// Plain text files are concatenated with all whitespace stripped; FASTA and
/// FASTQ files contribute the first record's sequence.
pub fn load_source(path: &str, format: SourceFormat) -> io::Result<String> {
    let sequence = match format {
        SourceFormat::Txt => fs::read_to_string(path)?
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect(),
        SourceFormat::Fasta => fasta::read_first_sequence(fasta::open_fasta(path)?)?,
        SourceFormat::Fastq => fastq::read_first_sequence(fastq::open_fastq(path)?)?,
    };

    if sequence.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("no sequence found in {}", path),
        ));
    }

    Ok(sequence)
}
