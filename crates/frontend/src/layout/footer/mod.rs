pub mod footer;

pub use footer::{BackendStatus, Footer};
