pub mod dates;
pub mod format;
pub mod normalize;
pub mod search;
pub mod vehicle;

pub use normalize::{normalize_row, normalize_rows};
pub use vehicle::{VehicleRecord, VehicleStatus};
