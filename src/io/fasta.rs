// src/io/fasta.rs
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// Open a FASTA file for reading, handles gzipped files automatically
pub fn open_fasta(path: &str) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read the sequence of the first record, concatenating wrapped lines.
pub fn read_first_sequence<R: BufRead>(reader: R) -> io::Result<String> {
    let mut sequence = String::new();
    let mut in_record = false;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            if in_record {
                break;
            }
            in_record = true;
        } else if in_record {
            sequence.push_str(line.trim());
        }
    }

    if sequence.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "no FASTA record found",
        ));
    }

    Ok(sequence)
}

/// Read every record's sequence, for summarizing an assembly output file.
pub fn read_all_sequences<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut sequences = Vec::new();
    let mut current = String::new();
    let mut in_record = false;

    for line in reader.lines() {
        let line = line?;
        if line.starts_with('>') {
            if in_record && !current.is_empty() {
                sequences.push(std::mem::take(&mut current));
            }
            in_record = true;
        } else if in_record {
            current.push_str(line.trim());
        }
    }

    if in_record && !current.is_empty() {
        sequences.push(current);
    }

    Ok(sequences)
}

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl FastaWriter {
    pub fn new(path: &str) -> io::Result<Self> {
        let file = File::create(path)?;
        if path.ends_with(".gz") {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    pub fn write_contig(&mut self, id: usize, sequence: &str) -> io::Result<()> {
        match self {
            FastaWriter::Plain(writer) => {
                writeln!(writer, ">contig_{}", id)?;
                writeln!(writer, "{}", sequence)?;
            }
            FastaWriter::Compressed(writer) => {
                writeln!(writer, ">contig_{}", id)?;
                writeln!(writer, "{}", sequence)?;
            }
        };
        Ok(())
    }
}
