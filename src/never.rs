/// Rust's `!` is unstable. This empty enum is a locally-defined equivalent
/// which is stable.
#[derive(Debug)]
pub enum Never {}
