// crates/adpost-core/src/state.rs
//
// Listing draft — the plain controlled fields of the form — and the payload
// the listings endpoint receives. No egui, no HTTP. Serializable via serde.
//
// Photos are not stored here: the form keeps the latest gallery snapshot
// next to the draft and hands it to `payload()` at submit time.

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeField, AttributeRecord};
use crate::helpers::price::{format_price, parse_price};
use crate::helpers::text::{clamp_chars, DESCRIPTION_MAX, NAME_MAX, TITLE_MAX};
use crate::location::LocationSelection;
use crate::media_types::{ItemView, MediaSnapshot};

/// The only category this form posts to.
pub const CATEGORY: &str = "Properties / For Sale: Houses & Apartments";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingDraft {
    pub title:       String,
    pub description: String,
    /// Display form with thousands separators, e.g. `"1,45,446"` → `"145,446"`.
    pub price:       String,
    pub name:        String,
    pub phone:       String,
    pub property:    AttributeRecord,
    pub location:    LocationSelection,
}

impl ListingDraft {
    pub fn with_seller(name: &str) -> Self {
        Self {
            name: clamp_chars(name, NAME_MAX),
            ..Self::default()
        }
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = clamp_chars(title, TITLE_MAX);
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = clamp_chars(description, DESCRIPTION_MAX);
    }

    pub fn set_price(&mut self, raw: &str) {
        self.price = format_price(raw);
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = clamp_chars(name, NAME_MAX);
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_string();
    }

    pub fn price_value(&self) -> u64 {
        parse_price(&self.price)
    }

    /// Required fields still empty, in form order. Used for hints only —
    /// submission is never blocked on this list.
    pub fn missing_fields(&self, photo_count: usize) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.property.is_set(AttributeField::Type) { missing.push("type"); }
        if self.title.trim().is_empty()                { missing.push("title"); }
        if self.description.trim().is_empty()          { missing.push("description"); }
        if self.price.is_empty()                       { missing.push("price"); }
        if photo_count == 0                            { missing.push("photos"); }
        if self.location.state.is_empty()              { missing.push("state"); }
        if self.location.city.is_empty()               { missing.push("city"); }
        if self.location.neighborhood.is_empty()       { missing.push("neighbourhood"); }
        if self.phone.trim().is_empty()                { missing.push("phone"); }
        missing
    }

    pub fn payload(&self, images: &MediaSnapshot) -> ListingPayload {
        ListingPayload {
            title:       self.title.clone(),
            description: self.description.clone(),
            price:       self.price_value(),
            name:        self.name.clone(),
            phone:       self.phone.clone(),
            property:    self.property.clone(),
            location:    self.location.clone(),
            images:      images.clone(),
        }
    }
}

/// Body of `POST <endpoint>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPayload {
    pub title:       String,
    pub description: String,
    pub price:       u64,
    pub name:        String,
    pub phone:       String,
    pub property:    AttributeRecord,
    pub location:    LocationSelection,
    pub images:      Vec<ItemView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_types::{PreviewUri, Role};
    use uuid::Uuid;

    #[test]
    fn title_is_capped_at_70_chars() {
        let mut d = ListingDraft::default();
        d.set_title(&"a".repeat(100));
        assert_eq!(d.title.chars().count(), TITLE_MAX);
    }

    #[test]
    fn seller_name_is_capped() {
        let d = ListingDraft::with_seller(&"n".repeat(45));
        assert_eq!(d.name.chars().count(), NAME_MAX);
    }

    #[test]
    fn price_is_formatted_on_entry_and_parsed_for_payload() {
        let mut d = ListingDraft::default();
        d.set_price("₹1450000");
        assert_eq!(d.price, "1,450,000");
        assert_eq!(d.payload(&Vec::new()).price, 1_450_000);
    }

    #[test]
    fn empty_price_posts_zero() {
        assert_eq!(ListingDraft::default().payload(&Vec::new()).price, 0);
    }

    #[test]
    fn missing_fields_on_blank_draft() {
        let d = ListingDraft::default();
        let missing = d.missing_fields(0);
        assert_eq!(missing.first(), Some(&"type"));
        assert!(missing.contains(&"photos"));
        assert!(missing.contains(&"phone"));
        assert!(!d.missing_fields(3).contains(&"photos"));
    }

    #[test]
    fn payload_json_shape() {
        let mut d = ListingDraft::with_seller("Tushar Rajput");
        d.set_title("2 BHK near Mall Road");
        d.set_phone("+91 98765 43210");
        d.location.select_state("Himachal Pradesh").unwrap();
        d.location.select_city("Shimla").unwrap();
        d.property.set(AttributeField::Bhk, "2").unwrap();

        let images = vec![ItemView {
            id:           Uuid::nil(),
            preview_uri:  PreviewUri::new("blob:adpost/1"),
            role:         Role::Cover,
            file_name:    "front.jpg".into(),
            content_type: "image/jpeg".into(),
        }];
        let json = serde_json::to_value(d.payload(&images)).unwrap();

        assert_eq!(json["title"], "2 BHK near Mall Road");
        assert_eq!(json["name"], "Tushar Rajput");
        assert_eq!(json["price"], 0);
        assert_eq!(json["property"]["bhk"], "2");
        assert_eq!(json["location"]["city"], "Shimla");
        assert_eq!(json["location"]["neighborhood"], "");
        assert_eq!(json["images"][0]["role"], "cover");
        assert_eq!(json["images"][0]["fileName"], "front.jpg");
    }
}
