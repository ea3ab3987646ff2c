//! rasterkit-test - Regression test helpers
//!
//! A small framework for the `tests/*_reg.rs` files across the
//! workspace: comparisons are recorded rather than asserted one by one,
//! and the test asserts once on the accumulated result.
//!
//! # Usage
//!
//! ```ignore
//! use rasterkit_test::RegParams;
//!
//! let mut rp = RegParams::new("dilate");
//! rp.compare_values(5.0, lit_pixels as f64, 0.0);
//! rp.compare_buffers(&result, &expected);
//! assert!(rp.cleanup());
//! ```

mod params;

pub use params::RegParams;
