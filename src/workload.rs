use std::io::{self, Read};
use std::str::SplitAsciiWhitespace;

use crate::memory::PageId;

/// One simulation workload: the raw memory description plus every
/// reference sequence that could be read before the input ran out.
#[derive(Debug, PartialEq, Eq)]
pub struct Workload {
    pub mem_size: i64,
    pub virt_size: i64,
    pub arch: String,
    pub page_count: i64,
    /// Declared sequence count from the header; `sequences` may hold fewer
    /// when the input is cut short.
    pub declared: i64,
    pub sequences: Vec<Vec<PageId>>,
}

impl Workload {
    pub fn read(mut input: impl Read) -> io::Result<Option<Workload>> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        Ok(Self::parse(&text))
    }

    /// Short or malformed input is not an error: a broken header yields
    /// nothing, a broken sequence keeps whatever was read before it.
    fn parse(text: &str) -> Option<Workload> {
        let mut tokens = text.split_ascii_whitespace();

        let mem_size = next_int(&mut tokens)?;
        let virt_size = next_int(&mut tokens)?;
        let arch = tokens.next()?.to_string();
        let page_count = next_int(&mut tokens)?;
        let declared = next_int(&mut tokens)?;

        let mut sequences = Vec::new();
        'sequences: for _ in 0..declared {
            let Some(len) = next_int(&mut tokens) else {
                break;
            };
            let mut refs = Vec::new();
            for _ in 0..len {
                match next_int(&mut tokens) {
                    Some(page) => refs.push(page),
                    None => {
                        sequences.push(refs);
                        break 'sequences;
                    }
                }
            }
            sequences.push(refs);
        }

        Some(Workload {
            mem_size,
            virt_size,
            arch,
            page_count,
            declared,
            sequences,
        })
    }
}

fn next_int(tokens: &mut SplitAsciiWhitespace) -> Option<i64> {
    tokens.next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<Workload> {
        Workload::read(text.as_bytes()).unwrap()
    }

    #[test]
    fn reads_a_complete_workload() {
        let w = parse("4096 8192 x86 8 2\n3 1 2 3\n2 4 5\n").unwrap();
        assert_eq!(w.mem_size, 4096);
        assert_eq!(w.virt_size, 8192);
        assert_eq!(w.arch, "x86");
        assert_eq!(w.page_count, 8);
        assert_eq!(w.declared, 2);
        assert_eq!(w.sequences, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn incomplete_header_yields_nothing() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("4096 8192"), None);
        assert_eq!(parse("4096 8192 x86 8"), None);
        assert_eq!(parse("4096 not-a-number x86 8 1"), None);
    }

    #[test]
    fn missing_sequence_length_keeps_earlier_sequences() {
        let w = parse("4096 8192 x86 8 3\n2 1 2\n").unwrap();
        assert_eq!(w.declared, 3);
        assert_eq!(w.sequences, vec![vec![1, 2]]);
    }

    #[test]
    fn short_sequence_is_kept_and_reading_stops() {
        let w = parse("4096 8192 x86 8 2\n4 1 2\n").unwrap();
        assert_eq!(w.sequences, vec![vec![1, 2]]);
    }

    #[test]
    fn bad_token_inside_a_sequence_stops_reading() {
        let w = parse("4096 8192 x86 8 2\n3 1 oops 3\n2 4 5\n").unwrap();
        assert_eq!(w.sequences, vec![vec![1]]);
    }

    #[test]
    fn negative_sequence_length_reads_as_empty() {
        let w = parse("4096 8192 x86 8 2\n-3\n2 4 5\n").unwrap();
        assert_eq!(w.sequences, vec![vec![], vec![4, 5]]);
    }

    #[test]
    fn negative_declared_count_reads_no_sequences() {
        let w = parse("4096 8192 x86 8 -1\n3 1 2 3\n").unwrap();
        assert_eq!(w.declared, -1);
        assert!(w.sequences.is_empty());
    }
}
