use crate::quantity::{Quantity, ShapeError};

/// Magnus 식 계수 (Vaisala, -20 °C ~ +50 °C, 최대 오차 0.08 %).
pub const MAGNUS_A_HPA: f64 = 6.116441;
pub const MAGNUS_M: f64 = 7.591386;
pub const MAGNUS_TN_C: f64 = 240.7263;

/// 전압 환산 배율 (Torr → hPa). 1000/760을 그대로 사용한다.
const HPA_PER_TORR: f64 = 1000.0 / 760.0;

/// 포화 수증기압 [hPa].
///
/// `A * 10^(m*T / (T + Tn))`, T는 섭씨 그대로 넣는다. 유효 범위 밖 온도도
/// 검증 없이 계산한다.
pub fn saturation_vapor_pressure_hpa(t_c: f64) -> f64 {
    MAGNUS_A_HPA * 10f64.powf(MAGNUS_M * t_c / (t_c + MAGNUS_TN_C))
}

fn partial_pressure_hpa(t_c: f64, rh_pct: f64) -> f64 {
    0.01 * rh_pct * saturation_vapor_pressure_hpa(t_c)
}

/// 온도[°C]와 상대습도[%]로 수증기 분압 [hPa]을 구한다.
pub fn water_partial_pressure_hpa(
    t_c: impl Into<Quantity>,
    rh_pct: impl Into<Quantity>,
) -> Result<Quantity, ShapeError> {
    let (t, rh) = (t_c.into(), rh_pct.into());
    Quantity::broadcast([&t, &rh], |[t, rh]| partial_pressure_hpa(t, rh))
}

/// 대기 중 수증기 몰분율.
///
/// * `t_c` - 기온 [°C]
/// * `rh_pct` - 상대습도 [%]
/// * `p_total_torr` - 전압 [Torr]
/// * `vs_dry_air` - `true`이면 건공기 기준 `Pw / (P - Pw)`, 아니면 `Pw / P`
///
/// 각 입력은 스칼라 또는 같은 길이의 배열이다. 0으로 나누기 등은 NaN/inf로
/// 그대로 전파된다.
pub fn chi_water(
    t_c: impl Into<Quantity>,
    rh_pct: impl Into<Quantity>,
    p_total_torr: impl Into<Quantity>,
    vs_dry_air: bool,
) -> Result<Quantity, ShapeError> {
    let (t, rh, p) = (t_c.into(), rh_pct.into(), p_total_torr.into());
    Quantity::broadcast([&t, &rh, &p], |[t, rh, p_torr]| {
        let pw = partial_pressure_hpa(t, rh);
        let p_hpa = p_torr * HPA_PER_TORR;
        if vs_dry_air {
            pw / (p_hpa - pw)
        } else {
            pw / p_hpa
        }
    })
}
