//! Index-space topology of structured meshes.

pub mod ghost;
