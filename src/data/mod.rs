//! Mesh records and the dense fields they are made of.

pub mod field;
pub mod mesh_structure;
