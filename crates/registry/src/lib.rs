//! Declaration-order flag registry.
//!
//! [`FlagSet`] holds a bucket of declared flags in registration order
//! and layers the `vexil-core` ordering/identity primitives on top:
//! each flag gets its [`FlagKey`](vexil_core::FlagKey) populated at
//! declaration time (shared prefix plus an id derived from the long
//! name), and listings can be re-ordered with any
//! [`Comparator`](vexil_core::Comparator) from the catalog.
//!
//! Argument parsing, value coercion, and help rendering live in the
//! layers above this crate.

mod def;
mod error;
mod set;


pub use def::FlagDef;
pub use error::DeclareError;
pub use set::FlagSet;
