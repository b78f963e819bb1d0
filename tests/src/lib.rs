#![cfg(test)]

mod access;
mod construction;
mod derive;
mod portable;
#[cfg(feature = "serde")]
mod serialization;
mod transfer;
