use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a rental property
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Studio,
    Shared,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Studio,
        PropertyType::Shared,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Studio => "studio",
            PropertyType::Shared => "shared",
        }
    }

    /// Capitalized label for selectors ("Apartment", "House", ...)
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Studio => "Studio",
            PropertyType::Shared => "Shared",
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core rental listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Monthly rent
    pub price: u32,
    pub location: String,
    /// 0 means studio
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub square_feet: u32,
    pub image_url: String,
    /// Available now (true) or coming soon (false)
    pub available: bool,
    pub available_from: NaiveDate,
    pub amenities: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub property_type: PropertyType,
}

impl Listing {
    pub fn is_studio(&self) -> bool {
        self.bedrooms == 0
    }

    /// Monthly price as a dollar amount with thousands separators, e.g. `$1,200`
    pub fn formatted_price(&self) -> String {
        let digits = self.price.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        out.push('$');
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

/// Public user record, safe to persist and hand to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A user together with their credential, as held by the mock directory
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Account {
    /// Strip the password, leaving the record that may be persisted
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}
