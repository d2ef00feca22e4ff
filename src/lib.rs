pub mod definition;
pub mod emitter;
pub mod error;
pub mod utils;
