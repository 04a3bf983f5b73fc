use serde::Deserialize;

use crate::memory::{Memory, PageId, PolicyStats};
use crate::replace::{fifo::Fifo, lru::Lru, min::Min, rand::Rand};

#[derive(Deserialize)]
#[serde(default)]
pub struct Config {
    policies: Vec<String>,
    seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            policies: ["fifo", "rand", "lru", "min"].map(String::from).to_vec(),
            seed: None,
        }
    }
}

impl Config {
    /// Run every configured policy, in order, over one reference sequence.
    pub fn run_policies(&self, n_frames: usize, refs: &[PageId]) -> Vec<PolicyStats> {
        self.policies
            .iter()
            .map(|name| match name.as_str() {
                "fifo" => Memory::run(Fifo::new(), n_frames, refs),
                "rand" => match self.seed {
                    Some(seed) => Memory::run(Rand::with_seed(seed), n_frames, refs),
                    None => Memory::run(Rand::new(), n_frames, refs),
                },
                "lru" => Memory::run(Lru::new(), n_frames, refs),
                "min" => Memory::run(Min::new(refs), n_frames, refs),
                _ => panic!("Unrecognized replacement policy: {}", name),
            })
            .collect()
    }
}
