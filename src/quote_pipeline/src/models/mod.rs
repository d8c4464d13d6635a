pub mod bar;
pub mod enriched;
pub mod interval;
pub mod period;
pub mod request;
pub mod summary;
