pub mod humid_air;

pub use humid_air::{chi_water, saturation_vapor_pressure_hpa, water_partial_pressure_hpa};
