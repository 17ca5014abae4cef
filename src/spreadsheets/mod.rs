pub mod export_xlsx;

pub use export_xlsx::{export_auction_xlsx, EXPORT_FILENAME};
