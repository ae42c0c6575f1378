//! 압력 단위 환산과 농도 변환의 선형성 테스트.
use atmos_chem_toolbox::{
    gas::{p_to_c, ConcentrationOptions},
    units::{convert_pressure, PressureUnit},
};

const TORR_TO_MBAR: f64 = 1013.25 / 760.0;

#[test]
fn torr_to_mbar() {
    let mbar = convert_pressure(760.0, PressureUnit::Torr, PressureUnit::Millibar);
    assert!((mbar - 1013.25).abs() < 1e-9);
}

#[test]
fn pascal_roundtrip() {
    let pa = convert_pressure(12.5, PressureUnit::Millibar, PressureUnit::Pascal);
    assert!((pa - 1250.0).abs() < 1e-9);
    let back = convert_pressure(pa, PressureUnit::Pascal, PressureUnit::Millibar);
    assert!((back - 12.5).abs() < 1e-12);
}

#[test]
fn torr_inputs_match_preconverted_mbar_inputs() {
    let p_torr = 7.6;
    let sys_torr = 740.0;

    let in_torr = p_to_c(
        p_torr,
        &ConcentrationOptions {
            pressure_unit: PressureUnit::Torr,
            system_pressure: sys_torr.into(),
            ..Default::default()
        },
    )
    .unwrap();
    let in_mbar = p_to_c(
        p_torr * TORR_TO_MBAR,
        &ConcentrationOptions {
            pressure_unit: PressureUnit::Millibar,
            system_pressure: (sys_torr * TORR_TO_MBAR).into(),
            ..Default::default()
        },
    )
    .unwrap();

    let (a, b) = (in_torr.as_scalar().unwrap(), in_mbar.as_scalar().unwrap());
    assert!((a - b).abs() <= 1e-9 * b.abs(), "torr {a} vs mbar {b}");
}

#[test]
fn concentration_is_linear_in_pressure() {
    let opts = ConcentrationOptions::default();
    let c = p_to_c(vec![1.0, 2.0, 4.0], &opts).unwrap();
    let v = c.values();
    assert!((v[1] - 2.0 * v[0]).abs() <= 1e-9 * v[1]);
    assert!((v[2] - 4.0 * v[0]).abs() <= 1e-9 * v[2]);
}
