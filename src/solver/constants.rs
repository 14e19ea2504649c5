/// Maximum distance from the target for an answer to count
pub const DEFAULT_TOLERANCE: u64 = 10;
/// Worker count used when the available parallelism cannot be determined
pub const FALLBACK_WORKERS: usize = 4;
