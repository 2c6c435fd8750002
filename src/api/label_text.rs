use super::LabelStyle;

/// Formats a label value as `[-]<prefix><digits>`.
///
/// The sign goes before the prefix so `-50` reads `-$50`, not `$-50`.
#[must_use]
pub fn format_label_value(value: f64, style: &LabelStyle) -> String {
    let digits = format!("{:.*}", style.value_decimals, value.abs());
    // Rounding may turn a tiny negative into "0", which must not keep its sign.
    let is_negative = value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let digits = if style.group_thousands {
        group_thousands(&digits)
    } else {
        digits
    };

    let sign = if is_negative { "-" } else { "" };
    format!("{sign}{}{digits}", style.value_prefix)
}

fn group_thousands(digits: &str) -> String {
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 1);
    for (position, ch) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
