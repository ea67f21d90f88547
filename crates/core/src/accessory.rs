//! The closed set of accessory labels offered by the survey form.
//!
//! The server stores whatever non-empty label it receives. Only the form
//! restricts the choice to these three, and only the dashboard interprets
//! them, by exact string match.

use serde::{Deserialize, Serialize};

/// Label stored for a bracelet preference.
pub const BRACELET_LABEL: &str = "Vòng tay";

/// Label stored for a keychain preference.
pub const KEYCHAIN_LABEL: &str = "Móc khóa";

/// Label stored for a phone strap preference.
pub const PHONE_STRAP_LABEL: &str = "Dây treo điện thoại";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accessory {
    #[serde(rename = "Vòng tay")]
    Bracelet,
    #[serde(rename = "Móc khóa")]
    Keychain,
    #[serde(rename = "Dây treo điện thoại")]
    PhoneStrap,
}

impl Accessory {
    /// Every accessory, in the order the form lists them.
    pub const ALL: [Accessory; 3] = [
        Accessory::Bracelet,
        Accessory::Keychain,
        Accessory::PhoneStrap,
    ];

    /// The label as stored in `accessory_type`.
    pub fn label(self) -> &'static str {
        match self {
            Accessory::Bracelet => BRACELET_LABEL,
            Accessory::Keychain => KEYCHAIN_LABEL,
            Accessory::PhoneStrap => PHONE_STRAP_LABEL,
        }
    }

    /// Exact, case-sensitive match against the known labels.
    ///
    /// No trimming or normalization: `"vòng tay"` and `" Vòng tay"` are unknown.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }
}

impl std::fmt::Display for Accessory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for accessory in Accessory::ALL {
            assert_eq!(Accessory::from_label(accessory.label()), Some(accessory));
        }
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(Accessory::from_label("Unknown"), None);
        assert_eq!(Accessory::from_label(""), None);
    }

    #[test]
    fn match_is_exact() {
        assert_eq!(Accessory::from_label("vòng tay"), None);
        assert_eq!(Accessory::from_label(" Vòng tay"), None);
        assert_eq!(Accessory::from_label("Dây treo"), None);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Accessory::Keychain).unwrap();
        assert_eq!(json, "\"Móc khóa\"");
    }
}
