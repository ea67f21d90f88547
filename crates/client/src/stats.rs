//! Dashboard aggregates and category tags, computed client-side.

use survey_core::accessory::Accessory;
use survey_core::survey::SurveyResponse;

/// Counts shown on the dashboard summary cards.
///
/// Responses whose `accessory_type` is not one of the three known labels
/// count toward `total` only. They fall in no category bucket, so
/// `bracelet + keychain + phone_strap` can be less than `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessoryStats {
    pub total: usize,
    pub bracelet: usize,
    pub keychain: usize,
    pub phone_strap: usize,
}

impl AccessoryStats {
    pub fn from_responses(responses: &[SurveyResponse]) -> Self {
        let mut stats = Self {
            total: responses.len(),
            ..Self::default()
        };

        for response in responses {
            match Accessory::from_label(&response.accessory_type) {
                Some(Accessory::Bracelet) => stats.bracelet += 1,
                Some(Accessory::Keychain) => stats.keychain += 1,
                Some(Accessory::PhoneStrap) => stats.phone_strap += 1,
                None => {}
            }
        }

        stats
    }

    /// Responses counted in `total` but in no category.
    pub fn uncategorized(&self) -> usize {
        self.total - (self.bracelet + self.keychain + self.phone_strap)
    }
}

/// Visual tag for an accessory cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Blue,
    Purple,
    /// Phone straps and the fallback for any unrecognised label.
    Pink,
}

impl Badge {
    pub fn for_accessory(accessory_type: &str) -> Self {
        match Accessory::from_label(accessory_type) {
            Some(Accessory::Bracelet) => Badge::Blue,
            Some(Accessory::Keychain) => Badge::Purple,
            Some(Accessory::PhoneStrap) | None => Badge::Pink,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Badge::Blue => "blue",
            Badge::Purple => "purple",
            Badge::Pink => "pink",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(accessories: &[&str]) -> Vec<SurveyResponse> {
        accessories
            .iter()
            .enumerate()
            .map(|(i, accessory)| SurveyResponse {
                id: i as i64 + 1,
                full_name: format!("Respondent {i}"),
                accessory_type: accessory.to_string(),
                color_preference: "Red".to_string(),
            })
            .collect()
    }

    #[test]
    fn counts_each_known_label() {
        let stats = AccessoryStats::from_responses(&responses(&["Vòng tay", "Móc khóa", "Móc khóa"]));

        assert_eq!(
            stats,
            AccessoryStats {
                total: 3,
                bracelet: 1,
                keychain: 2,
                phone_strap: 0,
            }
        );
    }

    #[test]
    fn unknown_label_counts_only_toward_total() {
        let stats = AccessoryStats::from_responses(&responses(&["Unknown", "Dây treo điện thoại"]));

        assert_eq!(stats.total, 2);
        assert_eq!(stats.bracelet, 0);
        assert_eq!(stats.keychain, 0);
        assert_eq!(stats.phone_strap, 1);
        assert_eq!(stats.uncategorized(), 1);
    }

    #[test]
    fn near_miss_labels_are_not_matched() {
        let stats = AccessoryStats::from_responses(&responses(&["vòng tay", "Móc khóa "]));

        assert_eq!(stats.total, 2);
        assert_eq!(stats.uncategorized(), 2);
    }

    #[test]
    fn empty_listing_is_all_zero() {
        assert_eq!(AccessoryStats::from_responses(&[]), AccessoryStats::default());
    }

    #[test]
    fn badges_follow_exact_labels() {
        assert_eq!(Badge::for_accessory("Vòng tay"), Badge::Blue);
        assert_eq!(Badge::for_accessory("Móc khóa"), Badge::Purple);
        assert_eq!(Badge::for_accessory("Dây treo điện thoại"), Badge::Pink);
        assert_eq!(Badge::for_accessory("Unknown"), Badge::Pink);
    }
}
