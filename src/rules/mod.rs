//! Composition rule checks
//!
//! Each check tests one composition property against one threshold and
//! returns `true` when the requirement is NOT met.

mod classes;
mod length;
mod recurring;

pub use classes::{
    insufficient_digits, insufficient_lowercase, insufficient_special, insufficient_uppercase,
};
pub use length::{too_long, too_short};
pub use recurring::has_recurring;
