//! Connection setup.

pub mod pragmas;

pub use pragmas::apply_pragmas;
