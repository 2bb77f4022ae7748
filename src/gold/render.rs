//! Output-sink helpers: Indian Rupee formatting and the labelled breakdown.

use super::types::{PricingField, PricingOutput, RawInput, Rupees};

pub const RUPEE: char = '₹';

/// Formats `amount` as INR with en-IN digit grouping, e.g. `₹12,34,567.89`.
///
/// NaN and zero (including `-0`) render as `₹0.00`. Exact ties round
/// half-to-even.
pub fn format_inr(amount: Rupees) -> String {
    if amount.is_nan() || amount == 0.0 {
        return format!("{RUPEE}0.00");
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}{RUPEE}∞");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}{RUPEE}{}.{frac_part}", group_en_in(int_part))
}

/// Last three digits, then groups of two: `1234567` -> `12,34,567`.
fn group_en_in(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        out.push_str(std::str::from_utf8(pair).unwrap_or_default());
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// One line of the breakdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub label: String,
    pub value: Rupees,
    /// Starts a new section (divider above).
    pub section_break: bool,
    pub highlight: bool,
}

impl ResultRow {
    fn plain(label: impl Into<String>, value: Rupees) -> Self {
        Self { label: label.into(), value, section_break: false, highlight: false }
    }

    pub fn formatted_value(&self) -> String {
        format_inr(self.value)
    }
}

/// The nine breakdown rows. GST labels show the GST fields as typed.
pub fn result_rows(raw: &RawInput, out: &PricingOutput) -> Vec<ResultRow> {
    let gst_gold = raw.get(PricingField::GstGoldPercent);
    let gst_making = raw.get(PricingField::GstMakingPercent);
    vec![
        ResultRow::plain("Price Of Gold", out.price_of_gold),
        ResultRow::plain("Price Of Gold - Reserved via Scheme", out.price_of_gold_reserved),
        ResultRow::plain("Making Charges", out.total_making_before_waiver),
        ResultRow::plain("Making Charges - Waived Off", out.making_waived_off),
        ResultRow { section_break: true, ..ResultRow::plain("Payable - Price Of Gold", out.payable_gold) },
        ResultRow::plain("Payable - Making Charges", out.payable_making),
        ResultRow::plain(format!("GST - Gold ({gst_gold}%)"), out.gst_gold_amt),
        ResultRow::plain(format!("GST - Making ({gst_making}%)"), out.gst_making_amt),
        ResultRow {
            section_break: true,
            highlight: true,
            ..ResultRow::plain("Total Payable", out.final_amt)
        },
    ]
}

/// Plain-text table: labels left, values right-aligned, dividers between
/// sections.
pub fn render_table(rows: &[ResultRow]) -> String {
    let values: Vec<String> = rows.iter().map(ResultRow::formatted_value).collect();
    let label_w = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    let value_w = values.iter().map(|v| v.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (row, value) in rows.iter().zip(&values) {
        if row.section_break {
            out.push_str(&"-".repeat(label_w + 2 + value_w));
            out.push('\n');
        }
        let label = if row.highlight { row.label.to_uppercase() } else { row.label.clone() };
        out.push_str(&format!("{label:<label_w$}  {value:>value_w$}\n"));
    }
    out
}
