//! Structured logging for the behavior layer.
//!
//! Events are flattened into [`LogLine`]s by [`ConsoleLayer`] and handed to a
//! sink. The browser build points the sink at the developer console; tests
//! collect lines in memory.
//!
//! ## Usage
//!
//! ```ignore
//! use storefront_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new(|line| println!("{}", line.render()))
//!     .with_filter("storefront=debug,storefront_core=debug")
//!     .init()?;
//! ```

pub mod layer;
pub mod line;

pub use layer::{ConsoleLayer, LoggingBuilder};
pub use line::LogLine;
