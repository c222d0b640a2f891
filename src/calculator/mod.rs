pub(crate) mod input;
mod model;
mod units;

pub(crate) use model::DiskSpaceModel;
pub(crate) use units::{from_base, to_base, Unit, UnitError};
