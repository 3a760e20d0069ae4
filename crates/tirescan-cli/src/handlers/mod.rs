mod context;

pub mod analyze;
pub mod config;
pub mod inspect;

pub use context::HandlerContext;
