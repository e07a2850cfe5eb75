//! 저널 전반에서 사용되는 공통 타입.

mod direction;
mod entry_id;
mod polarity;

pub use direction::*;
pub use entry_id::*;
pub use polarity::*;
