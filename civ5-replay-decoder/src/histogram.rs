//! Score histogram
//!
//! The block after the terminal record holds one score series per
//! civilization. Each data point is four `i32`s of which only the first (the
//! score) is understood.

use crate::reader::ByteStream;
use crate::types::{DecoderError, Result};
use serde::{Deserialize, Serialize};

/// Bytes ahead of each civilization's series: two reserved ints and a count
const CIV_HEADER_SIZE: usize = 12;

/// Bytes per data point: score and three unknown ints
const TURN_RECORD_SIZE: usize = 16;

/// Per-turn scores of every civilization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Histogram {
    /// Two values ahead of the civilization count
    pub reserved: [i32; 2],
    civ_count: usize,
    /// `scores[turn][civ]`
    scores: Vec<Vec<i32>>,
    width: usize,
    height: i64,
}

impl Histogram {
    /// Decode the score block from the current stream position
    pub fn decode(stream: &mut ByteStream) -> Result<Self> {
        let reserved = [stream.read_i32_le()?, stream.read_i32_le()?];
        let civ_count = usize::try_from(stream.read_i32_le()?).unwrap_or(0);
        // Every civ takes at least its two reserved ints and a turn count
        check_fits(stream, civ_count, CIV_HEADER_SIZE)?;

        let mut scores: Vec<Vec<i32>> = Vec::new();
        let mut width = 0usize;
        for civ in 0..civ_count {
            stream.read_i32_le()?;
            stream.read_i32_le()?;
            let turns = usize::try_from(stream.read_i32_le()?).unwrap_or(0);
            check_fits(stream, turns, TURN_RECORD_SIZE)?;
            width = width.max(turns);
            for turn in 0..turns {
                if scores.len() <= turn {
                    scores.resize_with(turn + 1, || vec![0; civ_count]);
                }
                let score = stream.read_i32_le()?;
                for _ in 0..3 {
                    stream.read_i32_le()?;
                }
                scores[turn][civ] = score;
            }
        }

        let height = scores
            .iter()
            .map(|row| row.iter().map(|&s| s as i64).sum::<i64>())
            .max()
            .unwrap_or(0)
            .max(0);

        log::debug!("Histogram: {} civs over {} turns, peak total {}", civ_count, width, height);

        Ok(Histogram {
            reserved,
            civ_count,
            scores,
            width,
            height,
        })
    }

    pub fn civ_count(&self) -> usize {
        self.civ_count
    }

    /// Longest series length
    pub fn width(&self) -> usize {
        self.width
    }

    /// Highest per-turn total over all civilizations
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Rows indexed by turn
    pub fn turns(&self) -> &[Vec<i32>] {
        &self.scores
    }

    /// Score series of one civilization, one value per turn
    pub fn series(&self, civ: usize) -> Vec<i32> {
        if civ >= self.civ_count {
            return Vec::new();
        }
        self.scores.iter().map(|row| row[civ]).collect()
    }

    /// One line per turn, civ scores separated by commas
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        for row in &self.scores {
            let line: Vec<String> = row.iter().map(i32::to_string).collect();
            csv.push_str(&line.join(","));
            csv.push('\n');
        }
        csv
    }
}

/// Fail before allocating when `count` records of `size` bytes cannot be there
fn check_fits(stream: &ByteStream, count: usize, size: usize) -> Result<()> {
    match count.checked_mul(size) {
        Some(needed) if needed <= stream.remaining() => Ok(()),
        needed => Err(DecoderError::EndOfStream {
            offset: stream.position(),
            needed: needed.unwrap_or(usize::MAX),
            available: stream.remaining(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ReplayWriter;

    #[test]
    fn test_decode_scores() {
        let mut w = ReplayWriter::new();
        w.histogram(&[vec![10, 20, 30], vec![5, 6]]);
        let mut stream = ByteStream::new(w.into_bytes());
        let histogram = Histogram::decode(&mut stream).unwrap();

        assert_eq!(stream.remaining(), 0);
        assert_eq!(histogram.reserved, [0, 12345]);
        assert_eq!(histogram.civ_count(), 2);
        assert_eq!(histogram.width(), 3);
        assert_eq!(histogram.height(), 30);
        assert_eq!(histogram.series(0), vec![10, 20, 30]);
        // Short series are padded with zeros
        assert_eq!(histogram.series(1), vec![5, 6, 0]);
        assert!(histogram.series(2).is_empty());
        assert_eq!(histogram.to_csv(), "10,5\n20,6\n30,0\n");
    }

    #[test]
    fn test_negative_counts_are_empty() {
        let mut w = ReplayWriter::new();
        w.int(0).int(0).int(-3);
        let histogram = Histogram::decode(&mut ByteStream::new(w.into_bytes())).unwrap();
        assert_eq!(histogram.civ_count(), 0);
        assert_eq!(histogram.width(), 0);
        assert_eq!(histogram.to_csv(), "");
    }

    #[test]
    fn test_truncated_block_is_end_of_stream() {
        let mut w = ReplayWriter::new();
        w.int(0).int(0).int(1).int(0).int(0).int(2).int(7);
        let err = Histogram::decode(&mut ByteStream::new(w.into_bytes())).unwrap_err();
        assert!(err.is_end_of_stream());
    }

    #[test]
    fn test_corrupt_counts_fail_without_allocating() {
        let mut w = ReplayWriter::new();
        w.int(0).int(0).int(i32::MAX);
        let err = Histogram::decode(&mut ByteStream::new(w.into_bytes())).unwrap_err();
        assert!(err.is_end_of_stream());

        let mut w = ReplayWriter::new();
        w.int(0).int(0).int(1).int(0).int(0).int(i32::MAX);
        w.int(1).int(2).int(3).int(4);
        match Histogram::decode(&mut ByteStream::new(w.into_bytes())).unwrap_err() {
            DecoderError::EndOfStream { offset, available, .. } => {
                assert_eq!(offset, 24);
                assert_eq!(available, 16);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
