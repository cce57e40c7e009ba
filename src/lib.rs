/*!
contact-events
==============

**contact-events** is a contact-event aggregation and dispatch library for
physics simulations, written with the rust programming language.

Naive per-body collision callbacks fire twice per colliding pair (once for
each body). This crate takes the raw per-step batch of contact groups
produced by a physics engine, unrolls it into a flat list of contact records,
orders begin/end records ahead of ongoing ones, and delivers each discrete
record to the listeners of both bodies exactly once per step, reusing its
buffers across steps.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod batch;
pub mod events;
pub mod pipeline;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(not(feature = "f64"))]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::Real;
    use na::Vector3;

    /// The vector type.
    pub type Vector = Vector3<Real>;
}
