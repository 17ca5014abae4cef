pub mod row;
pub mod source;

pub use row::{CellValue, RawRow};
pub use source::{HttpSheetSource, SheetSource};
