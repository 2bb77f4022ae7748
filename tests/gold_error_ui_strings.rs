use gold_pricing_core::gold::error::GoldError;
use gold_pricing_core::gold::error_catalog::GoldErrorCode;

#[test]
fn no_newlines_or_tabs() {
    let err = GoldError::new(GoldErrorCode::MalformedAssignment).with_context("line", "rate\n6000\tx");
    let user = err.to_user_string();
    assert!(!user.contains('\n'));
    assert!(!user.contains('\t'));
}

#[test]
fn truncate_long_context_values() {
    let long_value = "a".repeat(1024);
    let err = GoldError::new(GoldErrorCode::ConfigInvalid)
        .with_context("path", "cfg.toml")
        .with_context("detail", long_value);
    let user = err.to_user_string();
    assert!(user.len() < 512);
    assert!(err.context["detail"].ends_with('…'));
}

#[test]
fn unfilled_placeholder_is_left_as_is() {
    let err = GoldError::new(GoldErrorCode::ConfigInvalid).with_context("path", "gold.toml");
    assert_eq!(err.to_user_string(), "[GOLD-0004] invalid config gold.toml: {detail}");
}

#[test]
fn empty_key_is_ignored() {
    let err = GoldError::new(GoldErrorCode::UnknownField).with_context("", "x");
    assert!(err.context.is_empty());
}
