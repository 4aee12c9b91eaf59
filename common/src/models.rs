//! # Domain Models
//!
//! * [`room::Room`]: A named rectangular space with three positive dimensions.
//! * [`house::House`]: An ordered collection of rooms plus the pricing parameters.
//!
//! Both validate their input on construction, so a value that exists is always valid.
//! Derived figures are recomputed on every call and never cached.

pub mod house;
pub mod room;
