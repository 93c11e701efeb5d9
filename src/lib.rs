// Classic design patterns, one runnable demo per module.

//! # Design Patterns
//!
//! Each module is a self-contained demo that writes a fixed transcript:
//!
//! ## Creational
//! - Abstract Factory: regional ingredient factories composed into pizzas
//! - Factory Method: pizza stores that choose their own pizza variants
//! - Singleton: one lazily created chocolate boiler per process
//!
//! ## Structural
//! - Decorator: condiments wrapping beverages
//!
//! ## Behavioral
//! - Command: light and stereo commands on a remote control with undo
//! - Observer: weather data pushing readings to a display
//!
//! Run individual demos with:
//! ```bash
//! cargo run --bin abstract_factory
//! cargo run --bin command
//! cargo run --bin decorator
//! cargo run --bin factory_method
//! cargo run --bin observer
//! cargo run --bin singleton
//! ```
//!
//! or several at once with `cargo run --bin patterns -- observer singleton`.

pub mod abstract_factory;
pub mod command;
pub mod config;
pub mod decorator;
pub mod demo;
pub mod error;
pub mod factory_method;
pub mod logger;
pub mod observer;
pub mod singleton;

pub use config::PatternsConfig;
pub use demo::{run_all, Pattern};
pub use error::{PatternError, Result};
