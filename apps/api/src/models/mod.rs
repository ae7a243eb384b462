pub mod ai;
pub mod analysis;
pub mod resume;
pub mod storage;
