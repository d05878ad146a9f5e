//! Wish submission and grouping models

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::db::{CreateGiftWish, GiftWish};
use crate::{Error, Result};

/// Wishes keyed by class, keys ascending.
pub type WishesByClass = BTreeMap<String, Vec<GiftWish>>;

/// Raw submission from the form or the JSON API.
///
/// Every field arrives as text; [`WishSubmission::validate`] turns it into
/// something the store accepts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub class: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub age: String,
    #[serde(default)]
    pub gift_wish: String,
    #[serde(default)]
    pub gift_link: Option<String>,
}

impl WishSubmission {
    /// Check required fields, parse the age and normalize the link.
    pub fn validate(self) -> Result<CreateGiftWish> {
        let name = required(self.name, "imię")?;
        let class = required(self.class, "klasa")?;
        let age = parse_age(&self.age)?;
        let gift_wish = required(self.gift_wish, "prezent")?;

        // An empty link is stored as NULL, never as ""
        let gift_link = self
            .gift_link
            .map(|link| link.trim().to_string())
            .filter(|link| !link.is_empty());

        Ok(CreateGiftWish {
            name,
            class,
            age,
            gift_wish,
            gift_link,
            created_at: super::now(),
        })
    }
}

fn required(value: String, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(format!("Pole \"{}\" jest wymagane", field)));
    }
    Ok(trimmed.to_string())
}

fn parse_age(raw: &str) -> Result<i64> {
    let age: i64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Validation("Wiek musi być liczbą całkowitą".to_string()))?;

    if age < 0 {
        return Err(Error::Validation("Wiek nie może być ujemny".to_string()));
    }

    Ok(age)
}

/// Accepts `"8"` as well as `8` so JSON clients may send a number.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(n) => n.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    })
}

/// Group wishes, already sorted by class then name, into per-class lists.
///
/// Order within each class follows the input order.
pub fn group_by_class(wishes: Vec<GiftWish>) -> WishesByClass {
    let mut grouped = WishesByClass::new();
    for wish in wishes {
        grouped.entry(wish.class.clone()).or_default().push(wish);
    }
    grouped
}
