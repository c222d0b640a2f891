use crate::calculator::{from_base, DiskSpaceModel, Unit};
use serde::Serialize;

const STATUS_CLEANUP_RAN: &str =
    "After running cleanup tools, we were unable to free enough space to clear the alert.";
const STATUS_ASK: &str = "Would you like us to run clean up tools or add additional space?";

/// Units each capacity is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct DisplayUnits {
    pub total: Unit,
    pub free: Unit,
    pub used: Unit,
}

fn amount(value_gb: f64, unit: Unit) -> String {
    format!("{:.2} {unit}", from_base(value_gb, unit))
}

/// Render the low-space alert body for a volume.
pub(crate) fn make_email_body(
    server_name: &str,
    volume_name: &str,
    model: &DiskSpaceModel,
    units: DisplayUnits,
    cleanup_ran: bool,
) -> String {
    let total = amount(model.total_space, units.total);
    let used = amount(model.used_space(), units.used);
    let free = amount(model.free_space, units.free);
    let used_pct = model.used_percentage();
    let free_pct = model.free_percentage();
    let additional_gb = model.additional_space_needed().unwrap_or(0);
    let target = model.target_free_percentage.unwrap_or(0.0);
    let status = if cleanup_ran { STATUS_CLEANUP_RAN } else { STATUS_ASK };

    format!(
        "Hello,\n\n\
         We received an alert for low space on {server_name} Volume {volume_name}\n\n\
         Current volume details:\n\
         Total Capacity: {total}\n\
         Total Used/Free: {used} / {free}\n\
         Percent Used/Free: {used_pct:.2}% / {free_pct:.2}%\n\n\
         {status}\n\n\
         Adding or Clearing {additional_gb} GB will get the volume to {target:.2}% free space.\n\n\
         Please let us know how you would like to proceed.\n\n\
         Thank you"
    )
}
