//! Built-in language definitions

mod csharp;

pub use csharp::csharp_language;
