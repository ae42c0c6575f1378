//! 대기화학 실험실용 간이 계산 모음과 선 그래프 애니메이션 도우미.
//!
//! 모든 계산 함수는 상태가 없는 순수 함수이며 스칼라 또는 배열([`Quantity`])을
//! 원소 단위로 브로드캐스트한다.

pub mod air;
pub mod animation;
pub mod config;
pub mod conversion;
pub mod gas;
pub mod mixture;
pub mod quantity;
pub mod units;

pub use air::chi_water;
pub use gas::{p_to_c, p_to_c_tagged};
pub use mixture::raoults;
pub use quantity::{Quantity, ShapeError};
