//! The calculator form: three linked capacity fields, a target percentage and
//! the results area, reconciled by a pure reducer.

mod error;
mod reducer;
pub(crate) mod results;
pub(crate) mod types;

pub(crate) use error::FormError;
pub(crate) use reducer::apply;
pub(crate) use results::Results;
pub(crate) use types::{FormEdit, FormSettings, FormState, SpaceField};
