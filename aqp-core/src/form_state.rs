use crate::field::{Field, SARIMA, SARIMA_POLLUTANT};
use log::debug;
use std::collections::BTreeMap;

/// Raw text values of a form, one entry per configured field.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct FormState {
    values: BTreeMap<Field, String>,
}

impl FormState {
    /// Empty values for each of `fields`.
    pub fn new(fields: &[Field]) -> Self {
        Self {
            values: fields.iter().map(|f| (*f, String::new())).collect(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|v| v.is_empty())
    }

    /// Set a field and apply the pollutant/algorithm rule.
    ///
    /// Returns false when the field is not part of this form.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        if !self.values.contains_key(&field) {
            return false;
        }
        let linked = self.contains(Field::Pollutant) && self.contains(Field::Algorithm);
        match field {
            Field::Algorithm if linked && value == SARIMA => {
                debug!("sarima selected, pinning pollutant to {}", SARIMA_POLLUTANT);
                self.values.insert(Field::Pollutant, SARIMA_POLLUTANT.to_string());
            }
            Field::Pollutant
                if linked && value != SARIMA_POLLUTANT && self.get(Field::Algorithm) == SARIMA =>
            {
                debug!("pollutant {} is not supported by sarima, clearing algorithm", value);
                self.values.insert(Field::Algorithm, String::new());
            }
            _ => {}
        }
        self.values.insert(field, value);
        true
    }

    /// Blank every field, keeping the field set.
    pub fn clear(&mut self) {
        self.values.values_mut().for_each(String::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_form() -> FormState {
        FormState::new(&[Field::Location, Field::Pollutant, Field::Algorithm])
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = FormState::new(&[Field::Year, Field::Month, Field::Day]);
        assert!(form.is_empty());
        assert_eq!(form.get(Field::Year), "");
        assert!(!form.contains(Field::Model));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = FormState::new(&[Field::Year]);
        assert!(!form.set(Field::Model, "GRU"));
        assert_eq!(form.get(Field::Model), "");
    }

    #[test]
    fn test_sarima_forces_pm25() {
        let mut form = site_form();
        form.set(Field::Pollutant, "NO2");
        form.set(Field::Algorithm, "sarima");
        assert_eq!(form.get(Field::Pollutant), "PM2.5");
        assert_eq!(form.get(Field::Algorithm), "sarima");
    }

    #[test]
    fn test_leaving_pm25_clears_sarima() {
        let mut form = site_form();
        form.set(Field::Algorithm, "sarima");
        form.set(Field::Pollutant, "PM10");
        assert_eq!(form.get(Field::Pollutant), "PM10");
        assert_eq!(form.get(Field::Algorithm), "");

        // Keeping PM2.5 leaves sarima alone.
        form.set(Field::Algorithm, "sarima");
        form.set(Field::Pollutant, "PM2.5");
        assert_eq!(form.get(Field::Algorithm), "sarima");
    }

    #[test]
    fn test_other_algorithms_do_not_touch_pollutant() {
        let mut form = site_form();
        form.set(Field::Pollutant, "O3");
        form.set(Field::Algorithm, "lstm");
        form.set(Field::Pollutant, "CO");
        assert_eq!(form.get(Field::Pollutant), "CO");
        assert_eq!(form.get(Field::Algorithm), "lstm");
    }

    #[test]
    fn test_clear_keeps_shape() {
        let mut form = site_form();
        form.set(Field::Location, "South Tangerang");
        form.set(Field::Algorithm, "sarima");
        form.clear();
        assert!(form.is_empty());
        assert_eq!(form, site_form());
    }
}
