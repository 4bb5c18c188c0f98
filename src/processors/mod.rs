//! Text segmentation around translation calls

pub mod codeblock;
pub mod table;
