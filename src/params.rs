/// Values derived once per invocation from the raw memory description.
/// No validation happens here: inconsistent inputs produce inconsistent
/// numbers, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedParams {
    pub page_size: i64,
    pub num_frames: i64,
    pub min_swap: i64,
}

impl DerivedParams {
    pub fn derive(mem_size: i64, virt_size: i64, page_count: i64) -> Self {
        let page_size = if page_count == 0 {
            0
        } else {
            virt_size / page_count
        };
        let num_frames = if page_size > 0 { mem_size / page_size } else { 0 };
        let min_swap = (virt_size - mem_size).max(0);

        DerivedParams {
            page_size,
            num_frames,
            min_swap,
        }
    }

    /// Frame count handed to the simulators. The raw derived value is
    /// what gets printed and can be negative for negative inputs.
    pub fn usable_frames(&self) -> usize {
        self.num_frames.max(0) as usize
    }
}
