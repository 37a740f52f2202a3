pub mod applications;
pub mod columns;
pub mod data_gate;
pub mod registry;
