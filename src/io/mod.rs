pub mod checksum;
pub mod loaders;

pub use checksum::calculate_fingerprint;
pub use loaders::{load_bundled_counters, load_counters_from_path, BUNDLED_COUNTERS};
