use serde::{Deserialize, Serialize};

/// 혼합비 농도 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcentrationUnit {
    Ppm,
    #[default]
    Ppb,
    Ppt,
}

impl ConcentrationUnit {
    /// 몰분율(무차원)에 곱할 배율.
    pub fn factor(self) -> f64 {
        match self {
            ConcentrationUnit::Ppm => 1e6,
            ConcentrationUnit::Ppb => 1e9,
            ConcentrationUnit::Ppt => 1e12,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ConcentrationUnit::Ppm => "ppm",
            ConcentrationUnit::Ppb => "ppb",
            ConcentrationUnit::Ppt => "ppt",
        }
    }
}

impl std::fmt::Display for ConcentrationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
