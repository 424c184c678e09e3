//! # courier-engine
//!
//! The conversion-engine seam: MJML source text in, HTML plus an ordered
//! warning list out. The engine itself is an external library (`mrml`);
//! everything downstream depends only on the [`Engine`] trait.

pub mod convert;
pub mod error;

pub use convert::{Conversion, Engine, MrmlEngine, Warning};
pub use error::EngineError;
