//! Library side of the logo-report CLI

pub mod render;
pub mod util;
