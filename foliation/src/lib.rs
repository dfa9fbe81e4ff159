//! Subset-sum search over cardinality layers ("foliation").
//!
//! The state of the search is partitioned into layers indexed by subset size. Within a layer,
//! sums are not tracked exactly but modulo a working modulus `m`, which bounds the size of each
//! layer by `m` instead of by the range of achievable sums.
//!
//! ```
//! use foliation::{Instance, ModulusPolicy};
//!
//! let values = vec![-5, -1, -4, 2, 15, -62, -7, -8, -9, -10];
//! let instance = Instance::new(values, -10).with_modulus_policy(ModulusPolicy::Covering);
//! assert!(instance.exists().unwrap());
//! for subset in instance.enumerate().unwrap() {
//!     assert_eq!(subset.iter().sum::<i64>(), -10);
//! }
//! ```
//!
//! Unless the modulus is exact for the instance (see [`Precision`]), a positive answer only
//! means that some subset has a sum *congruent* to the target.

pub mod accumulator;
pub mod error;
pub mod instance;
pub mod layer;
pub mod modulus;
pub mod params;
pub mod stats;
pub mod witnesses;

/// Type of the input values and of their sums.
pub type Value = i64;

pub use accumulator::{Accumulator, Scope};
pub use error::FoliationError;
pub use instance::{enumerate, exists, Instance, Verdict};
pub use layer::Subset;
pub use modulus::{Modulus, ModulusPolicy, Precision};
pub use witnesses::Enumeration;
