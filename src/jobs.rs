//! Job generation

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// One image to fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    /// First resource id to request; bumped on every placeholder response
    pub resource_id: u64,
    /// Output file is named `<output_index>.jpg`
    pub output_index: usize,
}

impl Job {
    pub fn file_name(&self) -> String {
        format!("{}.jpg", self.output_index)
    }
}

/// Build the generator used for job ids
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Produce `count` jobs with random starting ids in `[0, id_range)`.
///
/// Output indices follow generation order. Ids may repeat. Panics if
/// `id_range` is zero.
pub fn generate<R: Rng>(count: usize, id_range: u64, rng: &mut R) -> Vec<Job> {
    (0..count)
        .map(|output_index| Job {
            resource_id: rng.gen_range(0..id_range),
            output_index,
        })
        .collect()
}
