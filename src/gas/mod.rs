pub mod concentration;

pub use concentration::{p_to_c, p_to_c_tagged, ConcentrationError, ConcentrationOptions};
