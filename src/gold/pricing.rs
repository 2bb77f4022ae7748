//! The pricing transform: one input record in, one breakdown out.
//!
//! Pure and total: no validation, no error cases. Negative or zero inputs
//! propagate arithmetically, and a waiver larger than the making charge
//! leaves `payable_making` negative.

use super::guardrails::percent_of;
use super::types::{PricingInput, PricingOutput};

/// Computes the payable breakdown for `input`.
///
/// Gold is charged on the regular grams only; making charges are levied on
/// the full weight and then reduced by the waiver on the reserved grams.
/// GST applies to the full gold price and to the making charge before waiver.
pub fn calculate(input: &PricingInput) -> PricingOutput {
    let rate = input.rate;
    let regular = input.regular_grams();

    // --------- Gold ---------
    let price_of_gold = input.total_grams * rate;
    let price_of_gold_reserved = input.reserved_grams * rate;
    let payable_gold = regular * rate;

    // --------- Making charges ---------
    let making_per_gram = input.making_per_gram();
    let total_making_before_waiver = input.total_grams * making_per_gram;
    let making_waived_off = input.reserved_grams * rate * (input.waive_reserved_percent / 100.0);
    let payable_making = total_making_before_waiver - making_waived_off;

    // --------- GST ---------
    let gst_gold_amt = percent_of(input.gst_gold_percent, price_of_gold);
    let gst_making_amt = percent_of(input.gst_making_percent, total_making_before_waiver);

    let sub_total = payable_gold + payable_making;
    let total_gst = gst_gold_amt + gst_making_amt;

    PricingOutput {
        price_of_gold,
        price_of_gold_reserved,
        total_making_before_waiver,
        making_waived_off,
        payable_gold,
        payable_making,
        gst_gold_amt,
        gst_making_amt,
        final_amt: sub_total + total_gst,
    }
}
