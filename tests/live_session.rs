//! Live recomputation: one publish on start, one per accepted change.
use std::io::Cursor;

use gold_pricing_core::gold::error_catalog::GoldErrorCode;
use gold_pricing_core::gold::session::{recompute, run_lines, CollectingSink, FormState, LineStats, LiveCalculator};
use gold_pricing_core::{PricingField, RawInput};

#[test]
fn initial_calculation_on_start() {
    let live = LiveCalculator::new(RawInput::default(), CollectingSink::default());
    assert_eq!(live.recomputations(), 1);
    assert_eq!(live.sink().quotes.len(), 1);
    assert_eq!(live.last().output.final_amt, 0.0);
}

#[test]
fn each_change_recomputes_from_fresh_snapshot() {
    let mut live = LiveCalculator::new(RawInput::default(), CollectingSink::default());
    for line in [
        "rate=6000",
        "makeRegular=10",
        "gstGold=3",
        "gstMaking=5",
        "totalG=10",
        "reservedG=4",
        "waiveReserved=50",
    ] {
        live.apply_assignment(line).unwrap();
    }
    assert_eq!(live.recomputations(), 8);

    let last = live.last().clone();
    assert_eq!(last.input.rate, 6000.0);
    assert_eq!(last.output.payable_making, -6_000.0);
    assert!((last.output.final_amt - 32_100.0).abs() < 1e-6);

    let sink = live.into_sink();
    assert_eq!(sink.quotes.len(), 8);
    assert_eq!(sink.quotes.last(), Some(&last));
    // rate alone moves nothing while grams are 0
    assert_eq!(sink.quotes[1].output.final_amt, 0.0);
}

#[test]
fn invalid_text_counts_as_zero() {
    let initial = RawInput::default()
        .with(PricingField::Rate, "6000")
        .with(PricingField::TotalGrams, "10");
    let mut live = LiveCalculator::new(initial, CollectingSink::default());
    assert_eq!(live.last().output.price_of_gold, 60_000.0);

    let quote = live.set_field(PricingField::TotalGrams, "ten");
    assert_eq!(quote.input.total_grams, 0.0);
    assert_eq!(quote.output.price_of_gold, 0.0);
    assert_eq!(quote.raw.total_grams, "ten");
}

#[test]
fn rejected_lines_do_not_recompute() {
    let mut live = LiveCalculator::new(RawInput::default(), CollectingSink::default());
    let err = live.apply_assignment("weight=10").unwrap_err();
    assert_eq!(err.code, GoldErrorCode::UnknownField);
    let err = live.apply_assignment("rate 6000").unwrap_err();
    assert_eq!(err.code, GoldErrorCode::MalformedAssignment);
    assert_eq!(live.recomputations(), 1);
    assert_eq!(live.sink().quotes.len(), 1);
    assert_eq!(live.form().fields(), &RawInput::default());
}

#[test]
fn recompute_reads_source_and_publishes() {
    let mut form = FormState::default();
    form.set(PricingField::Rate, "100");
    form.set(PricingField::TotalGrams, "3");
    let mut sink = CollectingSink::default();
    let quote = recompute(&form, &mut sink);
    assert_eq!(quote.output.price_of_gold, 300.0);
    assert_eq!(sink.quotes, vec![quote]);
}

#[test]
fn line_session_continues_after_bad_lines_and_stops_on_quit() {
    let mut live = LiveCalculator::new(RawInput::default(), CollectingSink::default());
    let input = "rate=6000\nweight=1\nrate 5\ntotalG=2\nquit\nreservedG=1\n";
    let mut rejected = Vec::new();
    let stats = run_lines(&mut live, Cursor::new(input), |err| rejected.push(err.code)).unwrap();

    assert_eq!(stats, LineStats { accepted: 2, rejected: 2, quit: true });
    assert_eq!(rejected, vec![GoldErrorCode::UnknownField, GoldErrorCode::MalformedAssignment]);
    // start-up + two accepted lines; nothing after quit
    assert_eq!(live.sink().quotes.len(), 3);
    assert_eq!(live.last().output.price_of_gold, 12_000.0);
    assert_eq!(live.form().fields().get(PricingField::ReservedGrams), "");
}

#[test]
fn line_session_skips_blank_and_comment_lines() {
    let mut live = LiveCalculator::new(RawInput::default(), CollectingSink::default());
    let input = "\n   \n# rate for today\n  rate = 100  \n\t\ntotal-grams=3\n";
    let stats = run_lines(&mut live, Cursor::new(input), |_| panic!("no line should be rejected")).unwrap();

    assert_eq!(stats, LineStats { accepted: 2, rejected: 0, quit: false });
    assert_eq!(live.recomputations(), 3);
    assert_eq!(live.last().output.price_of_gold, 300.0);
}

#[test]
fn line_session_exit_keyword() {
    let mut live = LiveCalculator::new(RawInput::default(), CollectingSink::default());
    let stats = run_lines(&mut live, Cursor::new("exit\nrate=1\n"), |_| {}).unwrap();
    assert!(stats.quit);
    assert_eq!(stats.accepted, 0);
    assert_eq!(live.recomputations(), 1);
}
