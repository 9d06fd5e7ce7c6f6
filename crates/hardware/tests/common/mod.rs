

pub use harness::{ChainContext, MacContext, fv, init_tracing};
