use crate::calculator::Unit;

/// Default location of the KEY="VALUE" config file.
pub(super) const DEFAULT_CONFIG_PATH: &str = "/etc/ideal-disk-space/ideal-disk-space.cfg";

/// Default port the daemon listens on (localhost only).
pub(super) const DEFAULT_PORT: u16 = 7093;

/// Unit new and cleared forms start in.
pub(super) const DEFAULT_UNIT: Unit = Unit::Gb;

/// Relative tolerance for the free + used == total check.
pub(super) const DEFAULT_CONSISTENCY_TOLERANCE: f64 = 1e-3;

/// Upper bound accepted for CONSISTENCY_TOLERANCE.
pub(super) const MAX_CONSISTENCY_TOLERANCE: f64 = 0.1;
