// src/io/fastq.rs
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

pub fn open_fastq(path: &str) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.ends_with(".gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Read the sequence line of the first FASTQ record.
pub fn read_first_sequence<R: BufRead>(reader: R) -> io::Result<String> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "empty FASTQ file",
            ))
        }
    };

    if !header.starts_with('@') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "FASTQ record must start with '@'",
        ));
    }

    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "FASTQ record truncated before sequence line",
        )),
    }
}
