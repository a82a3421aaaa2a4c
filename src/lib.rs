#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for painting on an in-memory RGBA canvas, and for moving that
//! canvas into and out of PNG data.
//!
//! The [`Canvas`] type owns a flat byte buffer of 8-bit RGBA pixels. Drawing
//! operations (rectangles, gradients, anti-aliased lines, rectangle copies)
//! alpha-blend directly into that buffer, and then the whole thing can be
//! [written out as a PNG](Canvas::to_png_vec) or
//! [re-loaded from one](Canvas::load_png).
//!
//! Exactly one storage format is supported on the PNG side: 8-bit truecolor
//! with alpha, not interlaced. That's also the only format the canvas itself
//! uses, so round-trips are byte exact.
//!
//! ```
//! use easel::{Canvas, RGBA8};
//!
//! let mut canvas = Canvas::new(64, 64);
//! canvas.color = RGBA8 { r: 0xFF, g: 0, b: 0, a: 0xFF };
//! canvas.line(0, 0, 63, 40);
//! let png: Vec<u8> = canvas.to_png_vec();
//!
//! let mut back = Canvas::new(1, 1);
//! back.load_png(&mut png.as_slice()).unwrap();
//! assert_eq!(back.bytes, canvas.bytes);
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod color;
pub use color::*;

mod canvas;
pub use canvas::*;

mod draw;
pub use draw::*;

mod source;
pub use source::*;

pub mod png;
