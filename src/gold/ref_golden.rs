//! Exact reference ("goldens") for the pricing breakdown, built on
//! **BigRational**.
//!
//! Every `f64` input is lifted to its exact rational value and the whole
//! breakdown is recomputed without rounding. Tests use it as an oracle for
//! the floating-point core in `pricing.rs`:
//! 1. exact value of each output field;
//! 2. largest relative deviation of the f64 core from that value.
//!
//! Not on the production path.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use super::types::{PricingInput, PricingOutput};

/// Exact counterpart of [`PricingOutput`].
#[derive(Clone, Debug, PartialEq)]
pub struct ExactOutput {
    pub price_of_gold: BigRational,
    pub price_of_gold_reserved: BigRational,
    pub total_making_before_waiver: BigRational,
    pub making_waived_off: BigRational,
    pub payable_gold: BigRational,
    pub payable_making: BigRational,
    pub gst_gold_amt: BigRational,
    pub gst_making_amt: BigRational,
    pub final_amt: BigRational,
}

impl ExactOutput {
    /// Pairs of (field name, exact value) in breakdown order.
    pub fn fields(&self) -> [(&'static str, &BigRational); 9] {
        [
            ("priceOfGold", &self.price_of_gold),
            ("priceOfGoldReserved", &self.price_of_gold_reserved),
            ("totalMakingBeforeWaiver", &self.total_making_before_waiver),
            ("makingWaivedOff", &self.making_waived_off),
            ("payableGold", &self.payable_gold),
            ("payableMaking", &self.payable_making),
            ("gstGoldAmt", &self.gst_gold_amt),
            ("gstMakingAmt", &self.gst_making_amt),
            ("finalAmt", &self.final_amt),
        ]
    }

    /// Nearest-f64 view of the exact values.
    pub fn to_f64(&self) -> Option<PricingOutput> {
        Some(PricingOutput {
            price_of_gold: self.price_of_gold.to_f64()?,
            price_of_gold_reserved: self.price_of_gold_reserved.to_f64()?,
            total_making_before_waiver: self.total_making_before_waiver.to_f64()?,
            making_waived_off: self.making_waived_off.to_f64()?,
            payable_gold: self.payable_gold.to_f64()?,
            payable_making: self.payable_making.to_f64()?,
            gst_gold_amt: self.gst_gold_amt.to_f64()?,
            gst_making_amt: self.gst_making_amt.to_f64()?,
            final_amt: self.final_amt.to_f64()?,
        })
    }
}

#[inline]
fn q(v: f64) -> Option<BigRational> {
    BigRational::from_float(v)
}

#[inline]
fn hundred() -> BigRational {
    BigRational::from_integer(BigInt::from(100))
}

#[inline]
fn pct(p: &BigRational, base: &BigRational) -> BigRational {
    (p / hundred()) * base
}

/// Exact breakdown, or `None` when any input is not finite.
pub fn exact_breakdown(input: &PricingInput) -> Option<ExactOutput> {
    let rate = q(input.rate)?;
    let making_pct = q(input.making_charge_percent)?;
    let gst_gold_pct = q(input.gst_gold_percent)?;
    let gst_making_pct = q(input.gst_making_percent)?;
    let total = q(input.total_grams)?;
    let reserved = q(input.reserved_grams)?;
    let waive_pct = q(input.waive_reserved_percent)?;

    let diff = &total - &reserved;
    let regular = if diff.is_negative() { BigRational::zero() } else { diff };

    let price_of_gold = &total * &rate;
    let price_of_gold_reserved = &reserved * &rate;
    let payable_gold = &regular * &rate;

    let making_per_gram = pct(&making_pct, &rate);
    let total_making_before_waiver = &total * &making_per_gram;
    let making_waived_off = pct(&waive_pct, &(&reserved * &rate));
    let payable_making = &total_making_before_waiver - &making_waived_off;

    let gst_gold_amt = pct(&gst_gold_pct, &price_of_gold);
    let gst_making_amt = pct(&gst_making_pct, &total_making_before_waiver);

    let final_amt = &payable_gold + &payable_making + &gst_gold_amt + &gst_making_amt;

    Some(ExactOutput {
        price_of_gold,
        price_of_gold_reserved,
        total_making_before_waiver,
        making_waived_off,
        payable_gold,
        payable_making,
        gst_gold_amt,
        gst_making_amt,
        final_amt,
    })
}

/// Largest |core - exact| / |exact| over all fields (absolute error where the
/// exact value is 0). `None` when inputs or outputs are not finite.
pub fn max_relative_error(input: &PricingInput, core: &PricingOutput) -> Option<f64> {
    let exact = exact_breakdown(input)?;
    let core_vals = [
        core.price_of_gold,
        core.price_of_gold_reserved,
        core.total_making_before_waiver,
        core.making_waived_off,
        core.payable_gold,
        core.payable_making,
        core.gst_gold_amt,
        core.gst_making_amt,
        core.final_amt,
    ];

    let mut worst = 0.0f64;
    for ((_, want), got) in exact.fields().iter().zip(core_vals) {
        let got_q = q(got)?;
        let delta = (&got_q - *want).abs();
        let err = if want.is_zero() { delta } else { delta / want.abs() };
        worst = worst.max(err.to_f64()?);
    }
    Some(worst)
}
