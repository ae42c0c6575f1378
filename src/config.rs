use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::animation::AnimateOptions;
use crate::gas::ConcentrationOptions;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 라이브러리 설정. 각 계산의 기본 단위와 애니메이션 기본값을 담는다.
///
/// ```toml
/// [concentration]
/// pressure_unit = "torr"
/// concentration_unit = "ppm"
/// system_pressure = 760.0
///
/// [animation]
/// length_secs = 10.0
/// set_margins = true
/// margin_fraction = 0.2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub concentration: ConcentrationOptions,
    pub animation: AnimateOptions,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(DEFAULT_CONFIG_PATH)
}

/// 지정한 설정 파일을 로드하거나 없으면 기본 설정으로 생성한다.
pub fn load_or_default_at(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        load_from(path)
    } else {
        log::info!("{} not found, writing default config", path.display());
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;
    use crate::units::{ConcentrationUnit, PressureUnit};

    #[test]
    fn partial_file_uses_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [concentration]
            pressure_unit = "torr"
            system_pressure = 760

            [animation]
            length_secs = 10.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.concentration.pressure_unit, PressureUnit::Torr);
        assert_eq!(cfg.concentration.concentration_unit, ConcentrationUnit::Ppb);
        assert_eq!(cfg.concentration.system_pressure, Quantity::Scalar(760.0));
        assert_eq!(cfg.animation.length_secs, 10.0);
        assert_eq!(cfg.animation.interval_ms, 200);
        assert_eq!(cfg.animation.filename, None);
    }

    #[test]
    fn unknown_unit_tag_is_a_parse_error() {
        let res: Result<Config, _> = toml::from_str(
            r#"
            [concentration]
            concentration_unit = "percent"
            "#,
        );
        assert!(res.is_err());
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("atmos_chem_toolbox_{}_{name}", std::process::id()))
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("config_test.toml");
        let mut cfg = Config::default();
        cfg.concentration.concentration_unit = ConcentrationUnit::Ppt;
        cfg.animation.filename = Some("out.gif".into());
        cfg.save(&path).unwrap();
        let loaded = load_or_default_at(&path).unwrap();
        assert_eq!(loaded, cfg);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = temp_path("config_missing.toml");
        let _ = std::fs::remove_file(&path);
        let cfg = load_or_default_at(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(load_from(&path).unwrap(), Config::default());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn default_path_is_config_toml() {
        assert_eq!(Path::new(DEFAULT_CONFIG_PATH).file_name().unwrap(), "config.toml");
    }
}
