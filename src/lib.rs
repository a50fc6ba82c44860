// src/lib.rs

//! # Control Blocks
//!
//! This crate provides `no_std` (with `alloc`) building blocks for classical
//! control-systems analysis on rational transfer functions:
//!
//! - [`build_pid`] composes proportional, integral and derivative terms into a
//!   single transfer function `k_p + k_i/s + k_d*s`.
//! - [`closed_loop`] converts an open-loop transfer function `T` into its
//!   unity negative feedback closed loop `T/(1+T)`.
//!
//! Both are built on [`TransferFunction`], a numerator/denominator pair of
//! polynomial coefficient vectors in descending power order.
//!
//! ```
//! use control_blocks::{build_pid, closed_loop, TransferFunction};
//!
//! let pid = build_pid(2.0, 1.0, 0.5);
//! assert_eq!(pid.num(), &[0.5, 2.0, 1.0]);
//! assert_eq!(pid.den(), &[1.0, 0.0]);
//!
//! let plant = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
//! let loop_tf = closed_loop(&plant).unwrap();
//! assert_eq!(loop_tf.den(), &[1.0, 2.0]);
//! ```

#![no_std]
#![deny(missing_docs)]

extern crate alloc;

pub mod error;
pub mod feedback;
pub mod pid;
pub mod poly;
pub mod system;
pub mod transfer_function;

#[doc(inline)]
pub use error::{Result, TransferFunctionError};
#[doc(inline)]
pub use feedback::*;
#[doc(inline)]
pub use pid::*;
#[doc(inline)]
pub use system::*;
#[doc(inline)]
pub use transfer_function::TransferFunction;

#[cfg(test)]
mod test_utils;
