pub mod counter;
pub mod park;
pub mod selection;
pub mod snapshot;
pub mod sun;

pub use counter::*;
pub use park::*;
pub use selection::*;
pub use snapshot::*;
pub use sun::*;
