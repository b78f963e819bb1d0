mod plain;
mod scalar;

pub use plain::impl_ as plain;
pub use scalar::impl_ as scalar;
