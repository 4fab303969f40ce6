//! Supporting utilities used by the conductor models.
//!
//! These modules are public because they're useful on their own, but their
//! APIs are not stable.

pub mod constraint;
pub mod ieee738;
pub mod units;
