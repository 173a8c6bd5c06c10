//! funcplot - a terminal function plotter.
//!
//! funcplot lets you pick a function from a short fixed list and draws its
//! graph on a Braille canvas, rescaled to the terminal whenever it changes
//! size.
//!
//! # Features
//!
//! - Automatic y-range fitting with asymmetric padding
//! - Poles and undefined regions break the graph instead of the draw
//! - Drop-down function selector with vim-style keys
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use funcplot::plot::{render, DisplayList, Palette, PlotConfig, ViewportSize};
//! use funcplot::registry::Registry;
//!
//! let registry = Registry::builtin();
//! let entry = registry.current().unwrap();
//!
//! let mut list = DisplayList::new();
//! let range = render(
//!     &mut list,
//!     |x| entry.evaluate(x),
//!     ViewportSize::new(400, 300),
//!     &PlotConfig::default(),
//!     &Palette::default(),
//! )
//! .unwrap();
//!
//! assert!(range.y_min < -0.99 && range.y_max > 0.99);
//! assert_eq!(list.lines().count(), 2 + 399);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod input;
pub mod plot;
pub mod registry;
pub mod selector;
pub mod shared;
pub mod ui;

pub use error::{FuncplotError, Result};
