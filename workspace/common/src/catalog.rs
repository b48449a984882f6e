//! Fixed enumerations offered by the analysis forms.

/// First year the yield models cover.
pub const YEAR_MIN: i32 = 1997;
/// Last year a forecast may be requested for.
pub const YEAR_MAX: i32 = 2030;

pub const STATES: [&str; 19] = [
    "Andhra Pradesh",
    "Bihar",
    "Chhattisgarh",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

pub const CROPS: [&str; 24] = [
    "Rice",
    "Wheat",
    "Maize",
    "Sugarcane",
    "Barley",
    "Bajra",
    "Jowar",
    "Groundnut",
    "Cotton",
    "Gram",
    "Pulses",
    "Rapeseed",
    "Mustard",
    "Tea",
    "Coffee",
    "Jute",
    "Potato",
    "Onion",
    "Soybean",
    "Sunflower",
    "Turmeric",
    "Tomato",
    "Chili",
    "Coconut",
];

pub fn is_known_state(state: &str) -> bool {
    STATES.contains(&state)
}

pub fn is_known_crop(crop: &str) -> bool {
    CROPS.contains(&crop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_exact() {
        assert!(is_known_state("Punjab"));
        assert!(!is_known_state("punjab"));
        assert!(!is_known_state(""));
        assert!(is_known_crop("Wheat"));
        assert!(!is_known_crop("Quinoa"));
    }

    #[test]
    fn test_catalogs_have_no_duplicates() {
        let mut states = STATES.to_vec();
        states.sort_unstable();
        states.dedup();
        assert_eq!(states.len(), STATES.len());

        let mut crops = CROPS.to_vec();
        crops.sort_unstable();
        crops.dedup();
        assert_eq!(crops.len(), CROPS.len());
    }
}
