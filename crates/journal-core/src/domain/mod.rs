//! 트레이딩 저널의 도메인 모델.

mod answers;
mod catalog;
mod catalogs;
mod journal;
mod setup;

pub use answers::*;
pub use catalog::*;
pub use catalogs::*;
pub use journal::*;
pub use setup::*;
