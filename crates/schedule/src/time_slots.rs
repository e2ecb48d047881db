use crate::normalize::normalize_time_slots;
use log::debug;
use models::time_slot::{TimeSlot, TimeSlotProfile};
use serde_json::Value;

/// Resolves the periods a schedule view should show
///
/// An empty or unusable response is not an error: the view falls back to
/// the profile's default periods.
///
/// # Arguments
/// * `value` - The time slot response, in any list shape
/// * `profile` - Which client's default periods to fall back to
///
/// # Returns
/// The periods in their fixed sequence
pub fn resolve_time_slots(value: &Value, profile: TimeSlotProfile) -> Vec<TimeSlot> {
    let mut slots = normalize_time_slots(value);

    if slots.is_empty() {
        debug!(
            "No time slots configured, using {} default periods",
            profile.slot_count()
        );
        return profile.defaults();
    }

    sort_by_sequence(&mut slots);
    slots
}

/// Orders periods by their `order` position, then by start time
///
/// Slots without an `order` go after the numbered ones. Start time breaks
/// ties, and slots whose start time cannot be parsed go last within their
/// group. The sort is stable, so full ties keep input order.
pub fn sort_by_sequence(slots: &mut [TimeSlot]) {
    slots.sort_by_key(|slot| {
        let start = slot.start();
        (slot.order.is_none(), slot.order, start.is_none(), start)
    });
}
