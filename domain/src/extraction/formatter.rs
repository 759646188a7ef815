//! Fact string rendering

use crate::city::attribute::AttributeKind;
use crate::city::entities::City;

/// Renders the grounding fact sent to the generator
pub struct FactFormatter;

impl FactFormatter {
    /// `"{Label}: {value}"`, landmarks joined with `", "`
    pub fn format(city: &City, attribute: AttributeKind) -> String {
        let value = match attribute {
            AttributeKind::Population => city.population.clone(),
            AttributeKind::Landmarks => city.landmarks.join(", "),
            AttributeKind::University => city.university.clone(),
        };
        format!("{}: {}", attribute.label(), value)
    }
}
