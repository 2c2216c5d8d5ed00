use serde::{Deserialize, Serialize};

/// The three fixed pickup windows. Not user-creatable.
///
/// Serialized as the original stored slot values so persisted orders carry
/// `"9:45-10:00"` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupSlot {
    /// Morning break, 9:45 - 10:00.
    #[serde(rename = "9:45-10:00")]
    MorningBreak,

    /// Lunch, 12:10 - 13:00.
    #[serde(rename = "12:10-13:00")]
    Lunch,

    /// Afternoon break, 14:25 - 14:35.
    #[serde(rename = "14:25-14:35")]
    AfternoonBreak,
}

impl PickupSlot {
    /// All slots, in daily order. The first is the default selection.
    pub const ALL: [PickupSlot; 3] = [
        PickupSlot::MorningBreak,
        PickupSlot::Lunch,
        PickupSlot::AfternoonBreak,
    ];

    /// The display label for slot pickers.
    pub fn label(&self) -> &'static str {
        match self {
            PickupSlot::MorningBreak => "9:45 - 10:00",
            PickupSlot::Lunch => "12:10 - 13:00",
            PickupSlot::AfternoonBreak => "14:25 - 14:35",
        }
    }

    /// The stable stored value.
    pub fn value(&self) -> &'static str {
        match self {
            PickupSlot::MorningBreak => "9:45-10:00",
            PickupSlot::Lunch => "12:10-13:00",
            PickupSlot::AfternoonBreak => "14:25-14:35",
        }
    }

    /// Resolves a stored value back to its slot.
    pub fn from_value(value: &str) -> Option<PickupSlot> {
        PickupSlot::ALL.into_iter().find(|slot| slot.value() == value)
    }
}

impl std::fmt::Display for PickupSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_roundtrips_through_from_value() {
        for slot in PickupSlot::ALL {
            assert_eq!(PickupSlot::from_value(slot.value()), Some(slot));
        }
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert_eq!(PickupSlot::from_value("10:00-11:00"), None);
        assert_eq!(PickupSlot::from_value(""), None);
    }

    #[test]
    fn serializes_as_the_stored_value() {
        let json = serde_json::to_string(&PickupSlot::Lunch).unwrap();
        assert_eq!(json, "\"12:10-13:00\"");
        let back: PickupSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PickupSlot::Lunch);
    }

    #[test]
    fn first_slot_is_the_default_selection() {
        assert_eq!(PickupSlot::ALL[0], PickupSlot::MorningBreak);
    }
}
