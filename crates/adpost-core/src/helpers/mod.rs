// crates/adpost-core/src/helpers/mod.rs
//
// Small pure helpers shared by the form and the panels.

pub mod capacity;
pub mod price;
pub mod text;
