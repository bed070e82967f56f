// crates/adpost-core/src/attributes.rs
//
// Property attributes for the "Properties / For Sale" category.
//
// A flat key → value record: no ordering, no capacity, no lifecycle. Every
// field starts as an empty string and is serialized under its camelCase key
// so the payload matches what the listings endpoint already expects.
//
// Choice fields carry their fixed option lists here so the panel can render
// buttons/combos straight from `options()` and the record can reject values
// that did not come from one of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeField {
    Type,
    Bhk,
    Bathrooms,
    Furnishing,
    ProjectStatus,
    ListedBy,
    SuperBuiltUpArea,
    CarpetArea,
    Maintenance,
    TotalFloors,
    FloorNo,
    CarParking,
    Facing,
    ProjectName,
}

/// Display order of the attribute section.
pub const ALL_FIELDS: &[AttributeField] = &[
    AttributeField::Type,
    AttributeField::Bhk,
    AttributeField::Bathrooms,
    AttributeField::Furnishing,
    AttributeField::ProjectStatus,
    AttributeField::ListedBy,
    AttributeField::SuperBuiltUpArea,
    AttributeField::CarpetArea,
    AttributeField::Maintenance,
    AttributeField::TotalFloors,
    AttributeField::FloorNo,
    AttributeField::ProjectName,
    AttributeField::CarParking,
    AttributeField::Facing,
];

impl AttributeField {
    pub fn key(self) -> &'static str {
        match self {
            AttributeField::Type             => "type",
            AttributeField::Bhk              => "bhk",
            AttributeField::Bathrooms        => "bathrooms",
            AttributeField::Furnishing       => "furnishing",
            AttributeField::ProjectStatus    => "projectStatus",
            AttributeField::ListedBy         => "listedBy",
            AttributeField::SuperBuiltUpArea => "superBuiltUpArea",
            AttributeField::CarpetArea       => "carpetArea",
            AttributeField::Maintenance      => "maintenance",
            AttributeField::TotalFloors      => "totalFloors",
            AttributeField::FloorNo          => "floorNo",
            AttributeField::CarParking       => "carParking",
            AttributeField::Facing           => "facing",
            AttributeField::ProjectName      => "projectName",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttributeField::Type             => "Type *",
            AttributeField::Bhk              => "BHK",
            AttributeField::Bathrooms        => "Bathrooms",
            AttributeField::Furnishing       => "Furnishing",
            AttributeField::ProjectStatus    => "Project Status",
            AttributeField::ListedBy         => "Listed By",
            AttributeField::SuperBuiltUpArea => "Super Built-up Area (sqft)",
            AttributeField::CarpetArea       => "Carpet Area (sqft)",
            AttributeField::Maintenance      => "Maintenance (Monthly)",
            AttributeField::TotalFloors      => "Total Floors",
            AttributeField::FloorNo          => "Floor No",
            AttributeField::CarParking       => "Car Parking",
            AttributeField::Facing           => "Facing",
            AttributeField::ProjectName      => "Project Name",
        }
    }

    /// Fixed options for choice fields, `None` for free text.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            AttributeField::Type => Some(&[
                "Flat / Apartments",
                "Independent / Builder Floors",
                "Farm House",
                "House & Villa",
            ]),
            AttributeField::Bhk | AttributeField::Bathrooms => Some(&["1", "2", "3", "4"]),
            AttributeField::Furnishing    => Some(&["Furnished", "Semi-Furnished", "Unfurnished"]),
            AttributeField::ProjectStatus => Some(&["New Launch", "Ready to Move", "Under Construction"]),
            AttributeField::ListedBy      => Some(&["Builder", "Dealer", "Owner"]),
            AttributeField::CarParking    => Some(&["0", "1", "2", "3"]),
            AttributeField::Facing        => Some(&[
                "East", "West", "North", "South", "North-East", "South-West",
            ]),
            AttributeField::SuperBuiltUpArea
            | AttributeField::CarpetArea
            | AttributeField::Maintenance
            | AttributeField::TotalFloors
            | AttributeField::FloorNo
            | AttributeField::ProjectName => None,
        }
    }

    /// Facing is a drop-down; the other choice fields are button rows.
    pub fn is_dropdown(self) -> bool {
        self == AttributeField::Facing
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeRecord {
    values: BTreeMap<AttributeField, String>,
}

impl Default for AttributeRecord {
    fn default() -> Self {
        Self {
            values: ALL_FIELDS.iter().map(|f| (*f, String::new())).collect(),
        }
    }
}

impl AttributeRecord {
    pub fn get(&self, field: AttributeField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Set `field`. Choice fields only accept one of their options or the
    /// empty string (cleared).
    pub fn set(&mut self, field: AttributeField, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        if let Some(options) = field.options() {
            if !value.is_empty() && !options.contains(&value.as_str()) {
                return Err(FormError::InvalidChoice { field: field.key(), value });
            }
        }
        self.values.insert(field, value);
        Ok(())
    }

    pub fn is_set(&self, field: AttributeField) -> bool {
        !self.get(field).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_every_key_empty() {
        let rec  = AttributeRecord::default();
        let json = serde_json::to_value(&rec).unwrap();
        let obj  = json.as_object().unwrap();
        assert_eq!(obj.len(), ALL_FIELDS.len());
        assert_eq!(obj["projectStatus"], "");
        assert_eq!(obj["superBuiltUpArea"], "");
        assert_eq!(obj["type"], "");
    }

    #[test]
    fn keys_match_serde_names() {
        for field in ALL_FIELDS {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.key());
        }
    }

    #[test]
    fn choice_field_rejects_unknown_value() {
        let mut rec = AttributeRecord::default();
        let err = rec.set(AttributeField::Furnishing, "Half").unwrap_err();
        assert!(matches!(err, FormError::InvalidChoice { field: "furnishing", .. }));
        assert_eq!(rec.get(AttributeField::Furnishing), "");
    }

    #[test]
    fn choice_field_accepts_option_and_clear() {
        let mut rec = AttributeRecord::default();
        rec.set(AttributeField::Bhk, "3").unwrap();
        assert_eq!(rec.get(AttributeField::Bhk), "3");
        rec.set(AttributeField::Bhk, "").unwrap();
        assert!(!rec.is_set(AttributeField::Bhk));
    }

    #[test]
    fn free_text_takes_anything() {
        let mut rec = AttributeRecord::default();
        rec.set(AttributeField::ProjectName, "Green Acres, Phase II").unwrap();
        assert_eq!(rec.get(AttributeField::ProjectName), "Green Acres, Phase II");
    }
}
