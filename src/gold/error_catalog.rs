//! Fixed catalog of input/config error codes.
use core::fmt;

/// Error code of the glue layers around the calculator.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum GoldErrorCode {
    /// Field name matches no input field.
    UnknownField,
    /// Line is not of the form `field=value`.
    MalformedAssignment,
    /// Config file could not be read.
    ConfigUnreadable,
    /// Config file is not valid TOML for the expected shape.
    ConfigInvalid,
}

impl GoldErrorCode {
    /// Stable textual code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownField => "GOLD-0001",
            Self::MalformedAssignment => "GOLD-0002",
            Self::ConfigUnreadable => "GOLD-0003",
            Self::ConfigInvalid => "GOLD-0004",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::UnknownField => "Unknown field",
            Self::MalformedAssignment => "Malformed assignment",
            Self::ConfigUnreadable => "Config unreadable",
            Self::ConfigInvalid => "Config invalid",
        }
    }

    /// Message template; `{name}` placeholders are filled from the context.
    pub const fn message_en(&self) -> &'static str {
        match self {
            Self::UnknownField => "'{field}' is not an input field",
            Self::MalformedAssignment => "expected field=value, got '{line}'",
            Self::ConfigUnreadable => "cannot read config {path}: {detail}",
            Self::ConfigInvalid => "invalid config {path}: {detail}",
        }
    }

    /// All variants in stable order.
    pub fn all() -> &'static [GoldErrorCode] {
        const ALL: &[GoldErrorCode] = &[
            GoldErrorCode::UnknownField,
            GoldErrorCode::MalformedAssignment,
            GoldErrorCode::ConfigUnreadable,
            GoldErrorCode::ConfigInvalid,
        ];
        ALL
    }
}

impl fmt::Display for GoldErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Message in the active locale (en).
pub fn default_locale_message(code: GoldErrorCode) -> &'static str {
    code.message_en()
}
