//! Request payloads for the yield service and the form drafts they are built from.
//!
//! Form inputs are held as raw strings (what an `<input>` or `<select>` holds) in
//! [`AnalysisDraft`] and [`ScenarioDraft`]. A draft only becomes a typed request
//! through `to_request`, which parses numbers and runs the `validator` rules, so
//! every request that reaches the network has passed client-side validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::catalog::{is_known_crop, is_known_state};

/// Body of `POST /analysis`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Validate)]
pub struct AnalysisRequest {
    #[validate(length(min = 1), custom(function = "validate_state"))]
    pub state: String,
    #[validate(length(min = 1), custom(function = "validate_crop"))]
    pub crop: String,
    /// Must stay in sync with `catalog::YEAR_MIN..=catalog::YEAR_MAX`.
    #[validate(range(min = 1997, max = 2030))]
    pub year: i32,
}

/// Body of `POST /simulate`. Serialized flat: the analysis fields sit next to the deltas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ScenarioRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: AnalysisRequest,
    /// Rainfall change in percent.
    #[validate(range(min = -50, max = 50))]
    pub rainfall: i32,
    /// Fertilizer change in percent.
    #[validate(range(min = -30, max = 30))]
    pub fertilizer: i32,
    /// Pesticide change in percent.
    #[validate(range(min = -40, max = 40))]
    pub pesticides: i32,
}

fn validate_state(state: &str) -> Result<(), ValidationError> {
    if is_known_state(state) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_state"))
    }
}

fn validate_crop(crop: &str) -> Result<(), ValidationError> {
    if is_known_crop(crop) {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_crop"))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Inputs of the analysis form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisField {
    State,
    Crop,
    Year,
}

impl AnalysisField {
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisField::State => "state",
            AnalysisField::Crop => "crop",
            AnalysisField::Year => "year",
        }
    }
}

/// Inputs of the what-if form, each a signed percentage delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioField {
    Rainfall,
    Fertilizer,
    Pesticides,
}

impl ScenarioField {
    pub const ALL: [ScenarioField; 3] = [
        ScenarioField::Rainfall,
        ScenarioField::Fertilizer,
        ScenarioField::Pesticides,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioField::Rainfall => "rainfall",
            ScenarioField::Fertilizer => "fertilizer",
            ScenarioField::Pesticides => "pesticides",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioField::Rainfall => "Rainfall Change (%)",
            ScenarioField::Fertilizer => "Fertilizer Change (%)",
            ScenarioField::Pesticides => "Pesticide Change (%)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ScenarioField::Rainfall => "e.g., +15 for 15% increase, -10 for 10% decrease",
            ScenarioField::Fertilizer => "e.g., +20 for 20% more fertilizer",
            ScenarioField::Pesticides => "e.g., +5 or -15",
        }
    }

    /// Inclusive bounds, mirrored by the `range` rules on [`ScenarioRequest`].
    pub fn bounds(&self) -> (i32, i32) {
        match self {
            ScenarioField::Rainfall => (-50, 50),
            ScenarioField::Fertilizer => (-30, 30),
            ScenarioField::Pesticides => (-40, 40),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisDraft {
    pub state: String,
    pub crop: String,
    pub year: String,
}

impl AnalysisDraft {
    pub fn get(&self, field: AnalysisField) -> &str {
        match field {
            AnalysisField::State => &self.state,
            AnalysisField::Crop => &self.crop,
            AnalysisField::Year => &self.year,
        }
    }

    pub fn set(&mut self, field: AnalysisField, value: String) {
        match field {
            AnalysisField::State => self.state = value,
            AnalysisField::Crop => self.crop = value,
            AnalysisField::Year => self.year = value,
        }
    }

    /// True when no required input is blank. Says nothing about range checks.
    pub fn is_complete(&self) -> bool {
        [AnalysisField::State, AnalysisField::Crop, AnalysisField::Year]
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }

    pub fn to_request(&self) -> Result<AnalysisRequest, FormError> {
        let state = required(AnalysisField::State.name(), &self.state)?;
        let crop = required(AnalysisField::Crop.name(), &self.crop)?;
        let year = parse_whole(AnalysisField::Year.name(), &self.year)?;

        let request = AnalysisRequest {
            state: state.to_string(),
            crop: crop.to_string(),
            year,
        };
        request.validate()?;
        Ok(request)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioDraft {
    pub rainfall: String,
    pub fertilizer: String,
    pub pesticides: String,
}

impl ScenarioDraft {
    pub fn get(&self, field: ScenarioField) -> &str {
        match field {
            ScenarioField::Rainfall => &self.rainfall,
            ScenarioField::Fertilizer => &self.fertilizer,
            ScenarioField::Pesticides => &self.pesticides,
        }
    }

    pub fn set(&mut self, field: ScenarioField, value: String) {
        match field {
            ScenarioField::Rainfall => self.rainfall = value,
            ScenarioField::Fertilizer => self.fertilizer = value,
            ScenarioField::Pesticides => self.pesticides = value,
        }
    }

    /// Builds the simulation request. The analysis draft must itself be valid:
    /// a scenario is always relative to a completed analysis selection.
    pub fn to_request(&self, analysis: &AnalysisDraft) -> Result<ScenarioRequest, FormError> {
        let base = analysis.to_request()?;
        let mut deltas = [0i32; 3];
        for (slot, field) in deltas.iter_mut().zip(ScenarioField::ALL) {
            *slot = parse_whole(field.name(), self.get(field))?;
        }
        let [rainfall, fertilizer, pesticides] = deltas;

        let request = ScenarioRequest {
            base,
            rainfall,
            fertilizer,
            pesticides,
        };
        request.validate()?;
        Ok(request)
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(value)
    }
}

fn parse_whole(field: &'static str, value: &str) -> Result<i32, FormError> {
    let value = required(field, value)?;
    value.parse::<i32>().map_err(|_| FormError::NotANumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{YEAR_MAX, YEAR_MIN};

    fn draft(state: &str, crop: &str, year: &str) -> AnalysisDraft {
        AnalysisDraft {
            state: state.to_string(),
            crop: crop.to_string(),
            year: year.to_string(),
        }
    }

    fn deltas(rainfall: &str, fertilizer: &str, pesticides: &str) -> ScenarioDraft {
        ScenarioDraft {
            rainfall: rainfall.to_string(),
            fertilizer: fertilizer.to_string(),
            pesticides: pesticides.to_string(),
        }
    }

    #[test]
    fn test_valid_analysis_draft() {
        let request = draft("Punjab", "Wheat", "2020").to_request().unwrap();
        assert_eq!(
            request,
            AnalysisRequest {
                state: "Punjab".to_string(),
                crop: "Wheat".to_string(),
                year: 2020,
            }
        );
    }

    #[test]
    fn test_year_boundaries() {
        assert!(draft("Punjab", "Wheat", "1996").to_request().is_err());
        assert!(draft("Punjab", "Wheat", "1997").to_request().is_ok());
        assert!(draft("Punjab", "Wheat", "2030").to_request().is_ok());
        assert!(draft("Punjab", "Wheat", "2031").to_request().is_err());

        assert_eq!(YEAR_MIN, 1997);
        assert_eq!(YEAR_MAX, 2030);
    }

    #[test]
    fn test_missing_fields_are_reported_first() {
        assert_eq!(
            draft("", "Wheat", "2020").to_request(),
            Err(FormError::Missing("state"))
        );
        assert_eq!(
            draft("Punjab", "  ", "2020").to_request(),
            Err(FormError::Missing("crop"))
        );
        assert_eq!(
            draft("Punjab", "Wheat", "").to_request(),
            Err(FormError::Missing("year"))
        );
        assert!(!draft("Punjab", "Wheat", "").is_complete());
        assert!(draft("Punjab", "Wheat", "2020").is_complete());
    }

    #[test]
    fn test_unknown_catalog_entries_rejected() {
        assert!(matches!(
            draft("Atlantis", "Wheat", "2020").to_request(),
            Err(FormError::Invalid(_))
        ));
        assert!(matches!(
            draft("Punjab", "Quinoa", "2020").to_request(),
            Err(FormError::Invalid(_))
        ));
    }

    #[test]
    fn test_non_numeric_year() {
        assert_eq!(
            draft("Punjab", "Wheat", "twenty").to_request(),
            Err(FormError::NotANumber {
                field: "year",
                value: "twenty".to_string()
            })
        );
    }

    #[test]
    fn test_scenario_requires_valid_analysis() {
        let scenario = deltas("10", "5", "-5");
        assert_eq!(
            scenario.to_request(&draft("Punjab", "", "2020")),
            Err(FormError::Missing("crop"))
        );
        assert!(scenario.to_request(&draft("Punjab", "Wheat", "1990")).is_err());
        assert!(scenario.to_request(&draft("Punjab", "Wheat", "2020")).is_ok());
    }

    #[test]
    fn test_scenario_bounds_match_validation() {
        let analysis = draft("Punjab", "Wheat", "2020");
        for field in ScenarioField::ALL {
            let (min, max) = field.bounds();
            for (value, ok) in [(min - 1, false), (min, true), (max, true), (max + 1, false)] {
                let mut scenario = deltas("0", "0", "0");
                scenario.set(field, value.to_string());
                assert_eq!(
                    scenario.to_request(&analysis).is_ok(),
                    ok,
                    "{} = {}",
                    field.name(),
                    value
                );
            }
        }
    }

    #[test]
    fn test_scenario_accepts_explicit_plus_sign() {
        let request = deltas("+15", "-10", "0")
            .to_request(&draft("Punjab", "Wheat", "2020"))
            .unwrap();
        assert_eq!(request.rainfall, 15);
        assert_eq!(request.fertilizer, -10);
    }

    #[test]
    fn test_scenario_serializes_flat() {
        let request = deltas("15", "-10", "5")
            .to_request(&draft("Punjab", "Wheat", "2020"))
            .unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "state": "Punjab",
                "crop": "Wheat",
                "year": 2020,
                "rainfall": 15,
                "fertilizer": -10,
                "pesticides": 5,
            })
        );
    }
}
