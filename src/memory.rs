use std::collections::HashSet;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::replace::{AccessResult, Replace};

pub type PageId = i64;

#[derive(Debug, Serialize)]
pub struct PolicyStats {
    pub policy: &'static str,
    pub faults: u64,
    pub hits: u64,
    pub fault_rate: f64,
    pub elapsed_us: u64,
    pub swap: String,
}

/// Policy-independent simulation state for one (policy, sequence) run.
/// The policy keeps its own eviction-order bookkeeping in `repl`.
pub struct Memory<R: Replace> {
    pub resident: HashSet<PageId>,
    swap: HashSet<PageId>,
    n_frames: usize,
    faults: u64,
    hits: u64,
    pub repl: R,
}

impl<R: Replace> Memory<R> {
    pub fn run(repl: R, n_frames: usize, refs: &[PageId]) -> PolicyStats {
        let start = Instant::now();
        let mut mem = Memory {
            resident: HashSet::new(),
            swap: HashSet::new(),
            n_frames,
            faults: 0,
            hits: 0,
            repl,
        };

        for (pos, &page) in refs.iter().enumerate() {
            // A referenced page leaves swap before anything else, hit or not.
            mem.swap.remove(&page);
            match R::access(&mut mem, page, pos) {
                AccessResult::Hit => mem.hits += 1,
                AccessResult::Fault => mem.faults += 1,
            }
        }

        mem.make_stats(start.elapsed())
    }

    pub fn is_full(&self) -> bool {
        self.resident.len() >= self.n_frames
    }

    pub fn evict(&mut self, victim: PageId) {
        self.resident.remove(&victim);
        self.swap.insert(victim);
    }

    fn make_stats(&self, elapsed: Duration) -> PolicyStats {
        let total_refs = (self.faults + self.hits) as f64;

        PolicyStats {
            policy: R::NAME,
            faults: self.faults,
            hits: self.hits,
            fault_rate: self.faults as f64 / total_refs,
            elapsed_us: elapsed.as_micros() as u64,
            swap: format_swap(&self.swap),
        }
    }
}

fn format_swap(swap: &HashSet<PageId>) -> String {
    let mut pages: Vec<PageId> = swap.iter().copied().collect();
    pages.sort_unstable();
    pages
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
