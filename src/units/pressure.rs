use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 mbar(= hPa)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    #[serde(rename = "mbar")]
    Millibar,
    #[serde(rename = "Pa")]
    Pascal,
    #[serde(rename = "atm")]
    Atm,
    #[serde(rename = "torr")]
    Torr,
}

const MBAR_PER_ATM: f64 = 1013.25;
const TORR_PER_ATM: f64 = 760.0;
const MBAR_PER_PA: f64 = 0.01;

impl PressureUnit {
    /// 이 단위의 값 1을 mbar로 환산한 배율.
    pub fn to_millibar_factor(self) -> f64 {
        match self {
            PressureUnit::Millibar => 1.0,
            PressureUnit::Pascal => MBAR_PER_PA,
            PressureUnit::Atm => MBAR_PER_ATM,
            PressureUnit::Torr => MBAR_PER_ATM / TORR_PER_ATM,
        }
    }

    /// 단위 태그 문자열 (`"mbar"`, `"Pa"`, `"atm"`, `"torr"`).
    pub fn tag(self) -> &'static str {
        match self {
            PressureUnit::Millibar => "mbar",
            PressureUnit::Pascal => "Pa",
            PressureUnit::Atm => "atm",
            PressureUnit::Torr => "torr",
        }
    }
}

impl std::fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// 주어진 압력을 mbar로 변환한다.
pub fn to_millibar(value: f64, unit: PressureUnit) -> f64 {
    value * unit.to_millibar_factor()
}

/// mbar 값을 원하는 단위로 변환한다.
pub fn from_millibar(value_mbar: f64, unit: PressureUnit) -> f64 {
    value_mbar / unit.to_millibar_factor()
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_millibar(to_millibar(value, from), to)
}
