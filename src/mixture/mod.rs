pub mod raoult;

pub use raoult::{raoults, raoults_aqueous, solute_mole_fraction};
