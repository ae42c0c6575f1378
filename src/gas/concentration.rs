use serde::{Deserialize, Serialize};

use crate::conversion::{self, ConversionError};
use crate::quantity::{Quantity, ShapeError};
use crate::units::{ConcentrationUnit, PressureUnit};

/// 표준 대기압 [mbar]. 배관 압력 기본값.
pub const STANDARD_SYSTEM_PRESSURE_MBAR: f64 = 1013.25;

/// 분압 → 농도 환산 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcentrationOptions {
    /// 입력 압력과 `system_pressure`의 단위
    pub pressure_unit: PressureUnit,
    /// 결과 농도 단위
    pub concentration_unit: ConcentrationUnit,
    /// 물질이 주입되는 배관의 압력 (`pressure_unit` 기준)
    pub system_pressure: Quantity,
}

impl Default for ConcentrationOptions {
    fn default() -> Self {
        Self {
            pressure_unit: PressureUnit::Millibar,
            concentration_unit: ConcentrationUnit::Ppb,
            system_pressure: Quantity::Scalar(STANDARD_SYSTEM_PRESSURE_MBAR),
        }
    }
}

/// 태그 기반 환산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum ConcentrationError {
    /// 단위 태그 오류
    Conversion(ConversionError),
    /// 입력 배열 길이 불일치
    Shape(ShapeError),
}

impl std::fmt::Display for ConcentrationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConcentrationError::Conversion(e) => write!(f, "단위 오류: {e}"),
            ConcentrationError::Shape(e) => write!(f, "입력 형태 오류: {e}"),
        }
    }
}

impl std::error::Error for ConcentrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConcentrationError::Conversion(e) => Some(e),
            ConcentrationError::Shape(e) => Some(e),
        }
    }
}

impl From<ConversionError> for ConcentrationError {
    fn from(value: ConversionError) -> Self {
        ConcentrationError::Conversion(value)
    }
}

impl From<ShapeError> for ConcentrationError {
    fn from(value: ShapeError) -> Self {
        ConcentrationError::Shape(value)
    }
}

/// 순수 액체의 증기압 또는 헤드스페이스 분압 `p`를 배관 내 농도로 환산한다.
///
/// `p`와 `system_pressure`를 같은 배율로 mbar로 맞춘 뒤
/// `(p / system_pressure) * factor`를 계산한다.
pub fn p_to_c(
    p: impl Into<Quantity>,
    options: &ConcentrationOptions,
) -> Result<Quantity, ShapeError> {
    let p = p.into();
    let to_mbar = options.pressure_unit.to_millibar_factor();
    let factor = options.concentration_unit.factor();
    Quantity::broadcast([&p, &options.system_pressure], |[p, p_sys]| {
        (p * to_mbar) / (p_sys * to_mbar) * factor
    })
}

/// 문자열 단위 태그를 받는 [`p_to_c`].
///
/// 압력 태그는 `"mbar"`, `"Pa"`, `"atm"`, `"torr"`를 인식하고 그 밖의 값은
/// mbar로 간주한다. 농도 태그가 `"ppm"`, `"ppb"`, `"ppt"`가 아니면
/// [`ConversionError::UnsupportedConcentrationUnit`]을 반환한다.
pub fn p_to_c_tagged(
    p: impl Into<Quantity>,
    pressure_unit: &str,
    concentration_unit: &str,
    system_pressure: impl Into<Quantity>,
) -> Result<Quantity, ConcentrationError> {
    let options = ConcentrationOptions {
        pressure_unit: conversion::parse_pressure_unit_lenient(pressure_unit),
        concentration_unit: conversion::parse_concentration_unit(concentration_unit)?,
        system_pressure: system_pressure.into(),
    };
    Ok(p_to_c(p, &options)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_mbar_ppb_one_atmosphere() {
        let opts = ConcentrationOptions::default();
        assert_eq!(opts.pressure_unit, PressureUnit::Millibar);
        assert_eq!(opts.concentration_unit, ConcentrationUnit::Ppb);
        assert_eq!(opts.system_pressure, Quantity::Scalar(1013.25));
    }

    #[test]
    fn ppm_example() {
        let opts = ConcentrationOptions {
            concentration_unit: ConcentrationUnit::Ppm,
            system_pressure: 1000.0.into(),
            ..Default::default()
        };
        let c = p_to_c(10.0, &opts).unwrap().as_scalar().unwrap();
        assert!((c - 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn unit_choice_cancels_when_both_pressures_share_it() {
        for unit in [PressureUnit::Pascal, PressureUnit::Atm, PressureUnit::Torr] {
            let opts = ConcentrationOptions {
                pressure_unit: unit,
                system_pressure: 2.0.into(),
                ..Default::default()
            };
            let c = p_to_c(1.0, &opts).unwrap().as_scalar().unwrap();
            assert!((c - 0.5e9).abs() < 1e-3, "{unit}: {c}");
        }
    }

    #[test]
    fn unsupported_concentration_tag_is_rejected() {
        let err = p_to_c_tagged(1.0, "mbar", "percent", 1013.25).unwrap_err();
        assert_eq!(
            err,
            ConcentrationError::Conversion(ConversionError::UnsupportedConcentrationUnit(
                "percent".into()
            ))
        );
    }

    #[test]
    fn unknown_pressure_tag_falls_through_as_mbar() {
        let a = p_to_c_tagged(5.0, "kPa", "ppb", 1013.25).unwrap();
        let b = p_to_c_tagged(5.0, "mbar", "ppb", 1013.25).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn system_pressure_may_be_an_array() {
        let c = p_to_c_tagged(1.0, "mbar", "ppm", vec![1000.0, 500.0]).unwrap();
        let v = c.values();
        assert!((v[0] - 1000.0).abs() < 1e-9);
        assert!((v[1] - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let err = p_to_c_tagged(vec![1.0, 2.0, 3.0], "mbar", "ppb", vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, ConcentrationError::Shape(_)));
    }
}
