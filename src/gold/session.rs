//! Live recomputation around the pure calculator.
//!
//! An [`InputSource`] is read fresh on every trigger and the result handed to
//! an [`OutputSink`]. [`LiveCalculator`] owns the form state and recomputes
//! once on start-up and once per accepted change.

use std::io::BufRead;

use serde::Serialize;
use tracing::debug;

use super::error::{GoldError, Result};
use super::error_catalog::GoldErrorCode;
use super::pricing::calculate;
use super::types::{PricingField, PricingInput, PricingOutput, RawInput};
use crate::{gold_bail, gold_err, telemetry};

/// Supplies the current raw field values.
pub trait InputSource {
    fn snapshot(&self) -> RawInput;
}

/// Receives every recomputed breakdown.
pub trait OutputSink {
    fn publish(&mut self, quote: &Quote);
}

/// One recomputation: what was typed, what it parsed to, what it costs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Quote {
    pub raw: RawInput,
    pub input: PricingInput,
    pub output: PricingOutput,
}

impl Quote {
    pub fn from_raw(raw: RawInput) -> Self {
        let input = raw.coerce();
        let output = calculate(&input);
        Self { raw, input, output }
    }
}

/// Reads `source`, computes, publishes. Returns the published quote.
pub fn recompute<I, S>(source: &I, sink: &mut S) -> Quote
where
    I: InputSource + ?Sized,
    S: OutputSink + ?Sized,
{
    let quote = telemetry::time("recompute", || Quote::from_raw(source.snapshot()));
    debug!(final_amt = quote.output.final_amt, "recomputed");
    sink.publish(&quote);
    quote
}

// --------- In-memory form ---------
/// Field values held in memory, set by change events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: RawInput,
}

impl FormState {
    pub fn new(initial: RawInput) -> Self {
        Self { fields: initial }
    }

    pub fn set(&mut self, field: PricingField, text: impl Into<String>) {
        self.fields.set(field, text);
    }

    pub fn fields(&self) -> &RawInput {
        &self.fields
    }
}

impl InputSource for FormState {
    fn snapshot(&self) -> RawInput {
        self.fields.clone()
    }
}

/// Splits `field=value`. The value may be empty (clears the field).
pub fn parse_assignment(line: &str) -> Result<(PricingField, String)> {
    let Some((name, value)) = line.split_once('=') else {
        gold_bail!(GoldErrorCode::MalformedAssignment, line => line.trim());
    };
    let field = PricingField::from_key(name)
        .ok_or_else(|| gold_err!(GoldErrorCode::UnknownField, field => name.trim()))?;
    Ok((field, value.trim().to_string()))
}

// --------- Live calculator ---------
pub struct LiveCalculator<S: OutputSink> {
    form: FormState,
    sink: S,
    last: Quote,
    recomputations: u64,
}

impl<S: OutputSink> LiveCalculator<S> {
    /// Performs the initial calculation immediately.
    pub fn new(initial: RawInput, mut sink: S) -> Self {
        let form = FormState::new(initial);
        let last = recompute(&form, &mut sink);
        Self { form, sink, last, recomputations: 1 }
    }

    /// Changes one field and recomputes.
    pub fn set_field(&mut self, field: PricingField, text: impl Into<String>) -> &Quote {
        self.form.set(field, text);
        self.last = recompute(&self.form, &mut self.sink);
        self.recomputations += 1;
        &self.last
    }

    /// Applies a `field=value` line. Errors leave the form untouched and
    /// trigger no recomputation.
    pub fn apply_assignment(&mut self, line: &str) -> Result<&Quote> {
        let (field, value) = parse_assignment(line).inspect_err(|err| {
            debug!(code = err.code.code(), "rejected input line");
        })?;
        Ok(self.set_field(field, value))
    }

    pub fn last(&self) -> &Quote {
        &self.last
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

// --------- Line-driven sessions ---------
/// Counters of a [`run_lines`] session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineStats {
    pub accepted: u64,
    pub rejected: u64,
    /// Ended by `quit`/`exit` rather than end of input.
    pub quit: bool,
}

/// Feeds `field=value` lines from `reader` into `live` until EOF or a
/// `quit`/`exit` line. Blank lines and `#` comments are skipped. Rejected
/// lines go to `on_reject` and the session continues.
pub fn run_lines<R, S, E>(live: &mut LiveCalculator<S>, reader: R, mut on_reject: E) -> std::io::Result<LineStats>
where
    R: BufRead,
    S: OutputSink,
    E: FnMut(&GoldError),
{
    let mut stats = LineStats::default();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            stats.quit = true;
            break;
        }
        match live.apply_assignment(line) {
            Ok(_) => stats.accepted += 1,
            Err(err) => {
                stats.rejected += 1;
                on_reject(&err);
            }
        }
    }
    Ok(stats)
}

/// Sink that keeps every quote; handy for tests and batch use.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub quotes: Vec<Quote>,
}

impl OutputSink for CollectingSink {
    fn publish(&mut self, quote: &Quote) {
        self.quotes.push(quote.clone());
    }
}

impl<F: FnMut(&Quote)> OutputSink for F {
    fn publish(&mut self, quote: &Quote) {
        self(quote)
    }
}
