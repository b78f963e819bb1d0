pub mod mem;
pub mod partial;
