pub mod storage;
pub mod ticker;
pub mod toast;
