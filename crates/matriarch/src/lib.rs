// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! matriarch: affine 4x4 transforms for display entities.
//!
//! The crate is built around [`Mat4`], an immutable `f64` matrix with
//! row-major element naming (`m_rc` is row `r`, column `c`). Transforms are
//! composed by right-multiplication, so
//! `Mat4::IDENTITY.translate(..).rotate(..).scale(..)` reads in the order the
//! operations apply to the entity's local frame.
//!
//! Host coordinates enter through [`Pos`] (a point carrying yaw and pitch) and
//! [`Vec3`] (a direction). Finished matrices leave as row or column arrays via
//! [`Mat4::to_rows`], [`Mat4::to_cols_array`], or [`Mat4::to_row_major_f32`].
//!
//! [`Transform`] is the serializable description of a translate, rotate, scale
//! sequence and is the only fallible surface in the crate.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::module_name_repetitions
)]

/// Matrix math (`Mat4`) and scalar helpers.
pub mod math;

/// Host coordinate value types.
pub mod coord;
mod error;
/// Serializable translate/rotate/scale descriptions.
pub mod transform;

pub use coord::{Pos, Vec3};
pub use error::TransformError;
pub use math::Mat4;
pub use transform::{AngleUnit, Rotation, Transform};
