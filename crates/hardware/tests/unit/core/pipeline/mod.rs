
/// Register structure tests.
pub mod latches;
