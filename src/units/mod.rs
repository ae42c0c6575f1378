//! 단위 정의 및 변환 모듈 모음.

pub mod concentration;
pub mod pressure;

pub use concentration::ConcentrationUnit;
pub use pressure::{convert_pressure, from_millibar, to_millibar, PressureUnit};
