//! R4 model layer: primitive aliases, datatypes, code systems, resources.

pub mod code_systems;
pub mod complex_types;
pub mod primitives;
pub mod resources;

pub use code_systems::*;
pub use complex_types::*;
pub use primitives::*;
pub use resources::*;
