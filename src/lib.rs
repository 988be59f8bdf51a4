/*!
prox3d
======

**prox3d** is a narrow-phase geometric query library for games: spheres,
planes, lines, rays, segments, infinite cylinders, capsules and oriented
boxes, with shortest-distance and nearest-point queries between every pair.

All shapes are immutable value types over `f32`; every query is a pure
function that returns a number, never an error.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
