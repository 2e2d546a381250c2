//! String-shaping primitives the pattern engine is built on: fixed-width
//! padding/truncation and hierarchical class-name abbreviation.

mod shorten;

pub use shorten::{shorten, shorten_class_name};
