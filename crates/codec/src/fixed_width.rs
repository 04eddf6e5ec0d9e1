//! Fixed-width binary rendering of unsigned integers.

/// Renders `value` as a binary digit string, left-padded with `'0'` to a
/// minimum width of 8.
///
/// Width 8 is a minimum, not a cap: values above 255 produce their full
/// natural representation with no truncation or validation. Callers that
/// rely on exactly-8-digit output must keep `value` at or below 255.
///
/// # Example
///
/// ```
/// use byteview_codec::fixed_width_binary;
///
/// assert_eq!(fixed_width_binary(255), "11111111");
/// assert_eq!(fixed_width_binary(5), "00000101");
/// ```
pub fn fixed_width_binary(value: u64) -> String {
    format!("{value:08b}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_eight_digits() {
        assert_eq!(fixed_width_binary(0), "00000000");
        assert_eq!(fixed_width_binary(1), "00000001");
        assert_eq!(fixed_width_binary(5), "00000101");
        assert_eq!(fixed_width_binary(255), "11111111");
    }

    #[test]
    fn width_is_a_minimum_not_a_cap() {
        assert_eq!(fixed_width_binary(256), "100000000");
        assert_eq!(fixed_width_binary(1024), "10000000000");
    }
}
