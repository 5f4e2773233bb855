//! Bell output and button input drivers.

pub mod button;
pub mod ring;
