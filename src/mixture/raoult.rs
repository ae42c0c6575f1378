use crate::quantity::{Quantity, ShapeError};

/// 물의 분자량 [g/mol]. 용매 기본값.
pub const WATER_MOLECULAR_WEIGHT: f64 = 18.02;
/// 물 대비 상대 밀도 기본값.
pub const WATER_RELATIVE_DENSITY: f64 = 1.0;

fn mole_fraction(conc_mg_per_l: f64, mw_solute: f64, mw_solvent: f64, density: f64) -> f64 {
    // mg/L → g/L → mol/L
    let mol_solute = conc_mg_per_l * 1e-3 / mw_solute;
    // g/mL → g/L → mol/L
    let mol_solvent = 1000.0 * density / mw_solvent;
    mol_solute / (mol_solute + mol_solvent)
}

/// 2성분 용액에서 용질의 몰분율.
pub fn solute_mole_fraction(
    conc_mg_per_l: impl Into<Quantity>,
    mw_solute: impl Into<Quantity>,
    mw_solvent: impl Into<Quantity>,
    density: impl Into<Quantity>,
) -> Result<Quantity, ShapeError> {
    let (c, mw, mw_s, rho) = (
        conc_mg_per_l.into(),
        mw_solute.into(),
        mw_solvent.into(),
        density.into(),
    );
    Quantity::broadcast([&c, &mw, &mw_s, &rho], |[c, mw, mw_s, rho]| {
        mole_fraction(c, mw, mw_s, rho)
    })
}

/// Raoult 법칙으로 용액 헤드스페이스의 용질 분압을 구한다.
///
/// * `p_vapor_solute` - 순수 용질의 증기압 (결과와 같은 단위)
/// * `conc_mg_per_l` - 용질 농도 [mg/L]
/// * `mw_solute`, `mw_solvent` - 분자량 [g/mol]
/// * `density` - 물 대비 상대 밀도 [g/mL]
///
/// 몰 수 합이 0이면 NaN이 그대로 반환된다.
pub fn raoults(
    p_vapor_solute: impl Into<Quantity>,
    conc_mg_per_l: impl Into<Quantity>,
    mw_solute: impl Into<Quantity>,
    mw_solvent: impl Into<Quantity>,
    density: impl Into<Quantity>,
) -> Result<Quantity, ShapeError> {
    let (p, c, mw, mw_s, rho) = (
        p_vapor_solute.into(),
        conc_mg_per_l.into(),
        mw_solute.into(),
        mw_solvent.into(),
        density.into(),
    );
    Quantity::broadcast([&p, &c, &mw, &mw_s, &rho], |[p, c, mw, mw_s, rho]| {
        p * mole_fraction(c, mw, mw_s, rho)
    })
}

/// 수용액(용매=물, 밀도 1)에 대한 [`raoults`].
pub fn raoults_aqueous(
    p_vapor_solute: impl Into<Quantity>,
    conc_mg_per_l: impl Into<Quantity>,
    mw_solute: impl Into<Quantity>,
) -> Result<Quantity, ShapeError> {
    raoults(
        p_vapor_solute,
        conc_mg_per_l,
        mw_solute,
        WATER_MOLECULAR_WEIGHT,
        WATER_RELATIVE_DENSITY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aqueous_matches_explicit_defaults() {
        let a = raoults_aqueous(100.0, 50.0, 78.11).unwrap();
        let b = raoults(100.0, 50.0, 78.11, 18.02, 1.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pure_solute_limit() {
        // 용매가 사실상 없으면 몰분율 → 1
        let chi = solute_mole_fraction(1e6, 50.0, 18.02, 1e-12)
            .unwrap()
            .as_scalar()
            .unwrap();
        assert!((chi - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_moles_is_nan() {
        let p = raoults(100.0, 0.0, 78.11, 18.02, 0.0).unwrap().as_scalar().unwrap();
        assert!(p.is_nan());
    }

    #[test]
    fn concentrations_as_array() {
        let p = raoults_aqueous(100.0, vec![0.0, 10.0, 20.0], 78.11).unwrap();
        let v = p.values();
        assert_eq!(v[0], 0.0);
        assert!(v[1] > 0.0 && v[2] > v[1]);
    }
}
