//! Input/output records of the pricing calculator.
//! All amounts are plain `f64`; currency formatting belongs to the sink.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::guardrails::{coerce_number, percent_of, regular_grams};

pub type Grams = f64;
pub type Percent = f64; // 0..=100, not clamped
pub type Rupees = f64;

/// Numeric pricing inputs. Missing or invalid values are 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingInput {
    /// Price per gram of gold.
    pub rate: Rupees,
    /// Making charge as a percent of `rate`, per gram.
    pub making_charge_percent: Percent,
    pub gst_gold_percent: Percent,
    pub gst_making_percent: Percent,
    pub total_grams: Grams,
    /// Part of `total_grams` covered by a savings scheme.
    pub reserved_grams: Grams,
    /// Percent of making charges waived on the reserved part.
    pub waive_reserved_percent: Percent,
}

impl PricingInput {
    /// `max(0, total_grams - reserved_grams)`.
    #[inline]
    pub fn regular_grams(&self) -> Grams {
        regular_grams(self.total_grams, self.reserved_grams)
    }

    #[inline]
    pub fn making_per_gram(&self) -> Rupees {
        percent_of(self.making_charge_percent, self.rate)
    }

    pub fn get(&self, field: PricingField) -> f64 {
        match field {
            PricingField::Rate => self.rate,
            PricingField::MakingChargePercent => self.making_charge_percent,
            PricingField::GstGoldPercent => self.gst_gold_percent,
            PricingField::GstMakingPercent => self.gst_making_percent,
            PricingField::TotalGrams => self.total_grams,
            PricingField::ReservedGrams => self.reserved_grams,
            PricingField::WaiveReservedPercent => self.waive_reserved_percent,
        }
    }
}

/// Derived amounts. No identity of their own; recomputed on every change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOutput {
    pub price_of_gold: Rupees,
    pub price_of_gold_reserved: Rupees,
    pub total_making_before_waiver: Rupees,
    pub making_waived_off: Rupees,
    pub payable_gold: Rupees,
    /// May be negative when the waiver exceeds the making charge.
    pub payable_making: Rupees,
    pub gst_gold_amt: Rupees,
    pub gst_making_amt: Rupees,
    pub final_amt: Rupees,
}

impl PricingOutput {
    #[inline]
    pub fn total_gst(&self) -> Rupees {
        self.gst_gold_amt + self.gst_making_amt
    }

    /// Payable before tax: gold on regular grams plus net making charges.
    #[inline]
    pub fn sub_total(&self) -> Rupees {
        self.payable_gold + self.payable_making
    }
}

// --------- Fields ---------
/// The seven input fields, in form order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PricingField {
    Rate,
    MakingChargePercent,
    GstGoldPercent,
    GstMakingPercent,
    TotalGrams,
    ReservedGrams,
    WaiveReservedPercent,
}

impl PricingField {
    /// Stable camelCase key (same as the JSON field name).
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::MakingChargePercent => "makingChargePercent",
            Self::GstGoldPercent => "gstGoldPercent",
            Self::GstMakingPercent => "gstMakingPercent",
            Self::TotalGrams => "totalGrams",
            Self::ReservedGrams => "reservedGrams",
            Self::WaiveReservedPercent => "waiveReservedPercent",
        }
    }

    pub const fn cli_key(&self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::MakingChargePercent => "making-charge-percent",
            Self::GstGoldPercent => "gst-gold-percent",
            Self::GstMakingPercent => "gst-making-percent",
            Self::TotalGrams => "total-grams",
            Self::ReservedGrams => "reserved-grams",
            Self::WaiveReservedPercent => "waive-reserved-percent",
        }
    }

    /// Short id used by the web form.
    pub const fn form_id(&self) -> &'static str {
        match self {
            Self::Rate => "rate",
            Self::MakingChargePercent => "makeRegular",
            Self::GstGoldPercent => "gstGold",
            Self::GstMakingPercent => "gstMaking",
            Self::TotalGrams => "totalG",
            Self::ReservedGrams => "reservedG",
            Self::WaiveReservedPercent => "waiveReserved",
        }
    }

    /// Resolves any of `key`, `cli_key` or `form_id`.
    pub fn from_key(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|f| f.key() == name || f.cli_key() == name || f.form_id() == name)
    }

    pub fn all() -> &'static [PricingField] {
        const ALL: &[PricingField] = &[
            PricingField::Rate,
            PricingField::MakingChargePercent,
            PricingField::GstGoldPercent,
            PricingField::GstMakingPercent,
            PricingField::TotalGrams,
            PricingField::ReservedGrams,
            PricingField::WaiveReservedPercent,
        ];
        ALL
    }
}

impl fmt::Display for PricingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// --------- Raw form values ---------
/// Field values as text, the way an input form holds them.
/// Deserializes from strings or bare numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RawInput {
    #[serde(deserialize_with = "text_or_number")]
    pub rate: String,
    #[serde(deserialize_with = "text_or_number")]
    pub making_charge_percent: String,
    #[serde(deserialize_with = "text_or_number")]
    pub gst_gold_percent: String,
    #[serde(deserialize_with = "text_or_number")]
    pub gst_making_percent: String,
    #[serde(deserialize_with = "text_or_number")]
    pub total_grams: String,
    #[serde(deserialize_with = "text_or_number")]
    pub reserved_grams: String,
    #[serde(deserialize_with = "text_or_number")]
    pub waive_reserved_percent: String,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
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
        TextOrNumber::Int(i) => i.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    })
}

impl RawInput {
    pub fn get(&self, field: PricingField) -> &str {
        match field {
            PricingField::Rate => &self.rate,
            PricingField::MakingChargePercent => &self.making_charge_percent,
            PricingField::GstGoldPercent => &self.gst_gold_percent,
            PricingField::GstMakingPercent => &self.gst_making_percent,
            PricingField::TotalGrams => &self.total_grams,
            PricingField::ReservedGrams => &self.reserved_grams,
            PricingField::WaiveReservedPercent => &self.waive_reserved_percent,
        }
    }

    pub fn set(&mut self, field: PricingField, text: impl Into<String>) {
        let slot = match field {
            PricingField::Rate => &mut self.rate,
            PricingField::MakingChargePercent => &mut self.making_charge_percent,
            PricingField::GstGoldPercent => &mut self.gst_gold_percent,
            PricingField::GstMakingPercent => &mut self.gst_making_percent,
            PricingField::TotalGrams => &mut self.total_grams,
            PricingField::ReservedGrams => &mut self.reserved_grams,
            PricingField::WaiveReservedPercent => &mut self.waive_reserved_percent,
        };
        *slot = text.into();
    }

    /// Builder-style `set`.
    pub fn with(mut self, field: PricingField, text: impl Into<String>) -> Self {
        self.set(field, text);
        self
    }

    /// Parses every field with the parse-or-zero policy.
    pub fn coerce(&self) -> PricingInput {
        PricingInput {
            rate: coerce_number(&self.rate),
            making_charge_percent: coerce_number(&self.making_charge_percent),
            gst_gold_percent: coerce_number(&self.gst_gold_percent),
            gst_making_percent: coerce_number(&self.gst_making_percent),
            total_grams: coerce_number(&self.total_grams),
            reserved_grams: coerce_number(&self.reserved_grams),
            waive_reserved_percent: coerce_number(&self.waive_reserved_percent),
        }
    }
}
