pub mod detail;
pub mod roster;
