pub mod extraction;
pub mod storage;
