pub mod error;
pub mod games;
pub mod logger;
pub mod scores;
pub mod storage;

pub use error::IllegalMove;
