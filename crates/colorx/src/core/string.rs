use crate::error::ColorFormatError;

/// Parse a color in hashed hexadecimal format. If successful, this function
/// returns the alpha, red, green, and blue channels as unsigned bytes.
///
/// The string must have six or eight hexadecimal digits after the hash. Six
/// digits are opaque, i.e., their alpha is `0xff`. Eight digits lead with
/// alpha. The caller is responsible for trimming the string.
fn parse_hashed(s: &str) -> Result<[u8; 4], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if !s.is_ascii() || (s.len() != 7 && s.len() != 9) {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_channel(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(1 + 2 * index..3 + 2 * index)
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        // from_str_radix() accepts a leading plus sign, which is no digit.
        if !t.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorFormatError::MalformedHex);
        }
        u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)
    }

    if s.len() == 7 {
        Ok([
            0xff,
            parse_channel(s, 0)?,
            parse_channel(s, 1)?,
            parse_channel(s, 2)?,
        ])
    } else {
        Ok([
            parse_channel(s, 0)?,
            parse_channel(s, 1)?,
            parse_channel(s, 2)?,
            parse_channel(s, 3)?,
        ])
    }
}

/// Parse the string into a packed color value.
///
/// This function trims leading and trailing white space before parsing the
/// hashed hexadecimal format. Digits are case-insensitive.
pub(crate) fn parse(s: &str) -> Result<u32, ColorFormatError> {
    let result = parse_hashed(s.trim());
    match result {
        Ok([a, r, g, b]) => Ok(u32::from_be_bytes([a, r, g, b])),
        Err(err) => {
            log::debug!("rejecting color {:?}: {}", s, err);
            Err(err)
        }
    }
}

/// Format the packed color value in canonical `#AARRGGBB` notation with
/// uppercase digits.
pub(crate) fn format(value: u32, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_fmt(format_args!("#{:08X}", value))
}

/// Format the packed color value as a string in canonical notation.
pub(crate) fn to_hex_string(value: u32) -> String {
    format!("#{:08X}", value)
}

// ====================================================================================================================
