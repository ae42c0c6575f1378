//! 문자열 단위 태그를 단위 enum으로 바꾸는 단일 검증 지점.
//!
//! 태그는 대소문자를 구분한다 (`"Pa"`는 허용, `"pa"`는 거부).
use std::str::FromStr;

use crate::units::{ConcentrationUnit, PressureUnit};

/// 단위 태그 해석 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 지원하지 않는 농도 단위 (ppm, ppb, ppt 외)
    UnsupportedConcentrationUnit(String),
    /// 알 수 없는 압력 단위 (엄격 모드에서만)
    UnknownPressureUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnsupportedConcentrationUnit(u) => write!(
                f,
                "지원하지 않는 농도 단위: {u:?}. \"ppm\", \"ppb\", \"ppt\" 중 하나를 사용하세요."
            ),
            ConversionError::UnknownPressureUnit(u) => write!(
                f,
                "알 수 없는 압력 단위: {u:?}. \"mbar\", \"Pa\", \"atm\", \"torr\" 중 하나를 사용하세요."
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 농도 단위 태그를 해석한다.
pub fn parse_concentration_unit(s: &str) -> Result<ConcentrationUnit, ConversionError> {
    match s {
        "ppm" => Ok(ConcentrationUnit::Ppm),
        "ppb" => Ok(ConcentrationUnit::Ppb),
        "ppt" => Ok(ConcentrationUnit::Ppt),
        _ => Err(ConversionError::UnsupportedConcentrationUnit(s.to_string())),
    }
}

/// 압력 단위 태그를 엄격하게 해석한다.
pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s {
        "mbar" => Ok(PressureUnit::Millibar),
        "Pa" => Ok(PressureUnit::Pascal),
        "atm" => Ok(PressureUnit::Atm),
        "torr" => Ok(PressureUnit::Torr),
        _ => Err(ConversionError::UnknownPressureUnit(s.to_string())),
    }
}

/// 압력 단위 태그를 해석하되, 알 수 없는 태그는 mbar로 간주한다.
///
/// 기존 태그 기반 호출부와의 호환을 위한 동작이다. 새 코드는
/// [`parse_pressure_unit`] 또는 [`PressureUnit`]을 직접 사용한다.
pub fn parse_pressure_unit_lenient(s: &str) -> PressureUnit {
    parse_pressure_unit(s).unwrap_or_else(|_| {
        log::warn!("unrecognized pressure unit {s:?}, treating value as mbar");
        PressureUnit::Millibar
    })
}

impl FromStr for PressureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pressure_unit(s)
    }
}

impl FromStr for ConcentrationUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_concentration_unit(s)
    }
}
