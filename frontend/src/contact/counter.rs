use crate::config::{COUNTER_WARNING_RATIO, MESSAGE_MAX_CHARS, MESSAGE_MIN_CHARS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterTone {
    Error,
    Warning,
    Neutral,
}

impl CounterTone {
    pub fn class(self) -> &'static str {
        match self {
            CounterTone::Error => "counter-error",
            CounterTone::Warning => "counter-warning",
            CounterTone::Neutral => "counter-neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterView {
    pub text: String,
    pub tone: CounterTone,
}

/// Length as the browser counts it for `maxlength`: UTF-16 code units, so an
/// emoji counts as two.
pub fn message_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Label shown under the message field for a message of `len` units
/// (see [`message_len`]).
pub fn counter_view(len: usize) -> CounterView {
    let mut text = format!("{}/{} حرف", len, MESSAGE_MAX_CHARS);
    let warning_at = (MESSAGE_MAX_CHARS as f64 * COUNTER_WARNING_RATIO) as usize;

    let tone = if len < MESSAGE_MIN_CHARS {
        text.push_str(&format!(" (الحد الأدنى {} أحرف)", MESSAGE_MIN_CHARS));
        CounterTone::Error
    } else if len > warning_at {
        CounterTone::Warning
    } else {
        CounterTone::Neutral
    };

    CounterView { text, tone }
}

/// Cuts `value` down to the message cap in UTF-16 units. A character that
/// would straddle the cap is dropped whole.
pub fn clamp_message(value: &str) -> String {
    let mut units = 0;
    for (at, ch) in value.char_indices() {
        units += ch.len_utf16();
        if units > MESSAGE_MAX_CHARS {
            return value[..at].to_string();
        }
    }
    value.to_string()
}
