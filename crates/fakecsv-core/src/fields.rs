//! Field selection vocabulary: locales, built-in fields, custom data types
//! and category presets.
//!
//! These types only name things. The value generators behind them live in
//! `fakecsv-generator`.

use crate::error::SynthError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale that parameterizes every built-in generator's value space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// US English
    #[default]
    #[serde(rename = "en_US")]
    EnUs,
    /// Hindi (India)
    #[serde(rename = "hi_IN")]
    HiIn,
    /// French (France)
    #[serde(rename = "fr_FR")]
    FrFr,
    /// German (Germany)
    #[serde(rename = "de_DE")]
    DeDe,
    /// Japanese (Japan)
    #[serde(rename = "ja_JP")]
    JaJp,
}

impl Locale {
    /// All supported locales in display order.
    pub const ALL: [Locale; 5] = [
        Locale::EnUs,
        Locale::HiIn,
        Locale::FrFr,
        Locale::DeDe,
        Locale::JaJp,
    ];

    /// Locale code (e.g. `en_US`).
    pub fn code(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::HiIn => "hi_IN",
            Locale::FrFr => "fr_FR",
            Locale::DeDe => "de_DE",
            Locale::JaJp => "ja_JP",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Locale::EnUs => "US (English)",
            Locale::HiIn => "India (Hindi)",
            Locale::FrFr => "France (French)",
            Locale::DeDe => "Germany (German)",
            Locale::JaJp => "Japan (Japanese)",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = SynthError;

    /// Accepts `en_US`, `en-us` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Locale::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| SynthError::UnknownLocale(s.to_string()))
    }
}

/// Built-in, locale-aware field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinField {
    #[serde(rename = "Full Name")]
    FullName,
    #[serde(rename = "First Name")]
    FirstName,
    #[serde(rename = "Last Name")]
    LastName,
    #[serde(rename = "Email")]
    Email,
    #[serde(rename = "Phone Number")]
    PhoneNumber,
    #[serde(rename = "Address")]
    Address,
    #[serde(rename = "City")]
    City,
    #[serde(rename = "State")]
    State,
    #[serde(rename = "Country")]
    Country,
    #[serde(rename = "Postal Code")]
    PostalCode,
    #[serde(rename = "Company")]
    Company,
    #[serde(rename = "Job Title")]
    JobTitle,
    #[serde(rename = "Date")]
    Date,
    #[serde(rename = "Time")]
    Time,
    #[serde(rename = "Text")]
    Text,
    #[serde(rename = "Username")]
    Username,
    #[serde(rename = "Password")]
    Password,
    #[serde(rename = "Credit Card Number")]
    CreditCardNumber,
    #[serde(rename = "IPv4")]
    Ipv4,
    #[serde(rename = "URL")]
    Url,
}

impl BuiltinField {
    /// Every built-in field in the order they are offered.
    pub const ALL: [BuiltinField; 20] = [
        BuiltinField::FullName,
        BuiltinField::FirstName,
        BuiltinField::LastName,
        BuiltinField::Email,
        BuiltinField::PhoneNumber,
        BuiltinField::Address,
        BuiltinField::City,
        BuiltinField::State,
        BuiltinField::Country,
        BuiltinField::PostalCode,
        BuiltinField::Company,
        BuiltinField::JobTitle,
        BuiltinField::Date,
        BuiltinField::Time,
        BuiltinField::Text,
        BuiltinField::Username,
        BuiltinField::Password,
        BuiltinField::CreditCardNumber,
        BuiltinField::Ipv4,
        BuiltinField::Url,
    ];

    /// Column name used for this field.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinField::FullName => "Full Name",
            BuiltinField::FirstName => "First Name",
            BuiltinField::LastName => "Last Name",
            BuiltinField::Email => "Email",
            BuiltinField::PhoneNumber => "Phone Number",
            BuiltinField::Address => "Address",
            BuiltinField::City => "City",
            BuiltinField::State => "State",
            BuiltinField::Country => "Country",
            BuiltinField::PostalCode => "Postal Code",
            BuiltinField::Company => "Company",
            BuiltinField::JobTitle => "Job Title",
            BuiltinField::Date => "Date",
            BuiltinField::Time => "Time",
            BuiltinField::Text => "Text",
            BuiltinField::Username => "Username",
            BuiltinField::Password => "Password",
            BuiltinField::CreditCardNumber => "Credit Card Number",
            BuiltinField::Ipv4 => "IPv4",
            BuiltinField::Url => "URL",
        }
    }
}

impl fmt::Display for BuiltinField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinField {
    type Err = SynthError;

    /// Matches the column name, ignoring ASCII case and surrounding spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BuiltinField::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SynthError::UnknownField(s.to_string()))
    }
}

/// Value distribution of a user-defined field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomDataType {
    /// Uniform integer in `[1, 100]`
    Integer,
    /// Uniform float in `[1.0, 100.0]`, rounded to 2 decimals
    Float,
    /// 8 random ASCII letters
    String,
}

impl fmt::Display for CustomDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CustomDataType::Integer => "Integer",
            CustomDataType::Float => "Float",
            CustomDataType::String => "String",
        })
    }
}

impl FromStr for CustomDataType {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(CustomDataType::Integer),
            "float" => Ok(CustomDataType::Float),
            "string" | "str" => Ok(CustomDataType::String),
            _ => Err(SynthError::UnknownDataType(s.to_string())),
        }
    }
}

/// What kind of generator backs a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Locale-aware built-in generator
    Builtin(BuiltinField),
    /// User-defined field with a fixed distribution
    Custom(CustomDataType),
    /// User-supplied callable
    Callable,
}

/// Named group of built-in fields selected together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryPreset {
    #[serde(rename = "E-commerce")]
    Ecommerce,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Finance")]
    Finance,
    #[serde(rename = "Education")]
    Education,
}

impl CategoryPreset {
    /// Every preset in display order.
    pub const ALL: [CategoryPreset; 4] = [
        CategoryPreset::Ecommerce,
        CategoryPreset::Healthcare,
        CategoryPreset::Finance,
        CategoryPreset::Education,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            CategoryPreset::Ecommerce => "E-commerce",
            CategoryPreset::Healthcare => "Healthcare",
            CategoryPreset::Finance => "Finance",
            CategoryPreset::Education => "Education",
        }
    }

    /// Built-in fields this preset selects, in column order.
    pub fn fields(self) -> &'static [BuiltinField] {
        use BuiltinField::*;
        match self {
            CategoryPreset::Ecommerce => &[
                FullName,
                Email,
                PhoneNumber,
                Address,
                City,
                Country,
                PostalCode,
            ],
            CategoryPreset::Healthcare => &[FullName, Date, JobTitle, City, State, Email],
            CategoryPreset::Finance => &[FullName, Email, CreditCardNumber, Address, Company],
            CategoryPreset::Education => &[FullName, Email, Date, Address, JobTitle],
        }
    }
}

impl fmt::Display for CategoryPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CategoryPreset {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CategoryPreset::ALL
            .into_iter()
            .find(|p| {
                p.name().eq_ignore_ascii_case(wanted)
                    || p.name().replace('-', "").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| SynthError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("en_US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("ja-jp".parse::<Locale>().unwrap(), Locale::JaJp);
        assert!(matches!(
            "xx_XX".parse::<Locale>(),
            Err(SynthError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_builtin_names_round_trip() {
        for field in BuiltinField::ALL {
            assert_eq!(field.name().parse::<BuiltinField>().unwrap(), field);
        }
        assert_eq!(
            " full name ".parse::<BuiltinField>().unwrap(),
            BuiltinField::FullName
        );
        assert!("Shoe Size".parse::<BuiltinField>().is_err());
    }

    #[test]
    fn test_custom_data_type_parse() {
        assert_eq!(
            "Integer".parse::<CustomDataType>().unwrap(),
            CustomDataType::Integer
        );
        assert_eq!(
            "float".parse::<CustomDataType>().unwrap(),
            CustomDataType::Float
        );
        assert!(matches!(
            "date".parse::<CustomDataType>(),
            Err(SynthError::UnknownDataType(_))
        ));
    }

    #[test]
    fn test_preset_fields() {
        let ecommerce: Vec<&str> = CategoryPreset::Ecommerce
            .fields()
            .iter()
            .map(|f| f.name())
            .collect();
        assert_eq!(
            ecommerce,
            vec![
                "Full Name",
                "Email",
                "Phone Number",
                "Address",
                "City",
                "Country",
                "Postal Code"
            ]
        );
        assert_eq!(
            "ecommerce".parse::<CategoryPreset>().unwrap(),
            CategoryPreset::Ecommerce
        );
    }
}
