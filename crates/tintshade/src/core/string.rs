use crate::error::ColorFormatError;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        // from_str_radix() would accept a leading plus sign.
        return Err(ColorFormatError::MalformedHex);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

/// Parse the string into a 24-bit color.
///
/// This function recognizes the three and six digit hashed hexadecimal format.
/// Before parsing, it trims leading and trailing white space. Hexadecimal
/// digits may be upper- or lowercase.
pub(crate) fn parse(s: &str) -> Result<[u8; 3], ColorFormatError> {
    parse_hashed(s.trim())
}

/// Format the 24-bit color in six digit hashed hexadecimal format with
/// lowercase digits.
pub(crate) fn format(coordinates: &[u8; 3], f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let [r, g, b] = *coordinates;
    f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_hashed, ColorFormatError};

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#3AF")?, [0x33_u8, 0xaa, 0xff]);
        assert_eq!(parse_hashed("#3498DB")?, parse_hashed("#3498db")?);
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#3498db80"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#"), Err(ColorFormatError::UnexpectedCharacters));
        assert_eq!(
            parse_hashed("#💩"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(parse_hashed("#💩00"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#00g"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#+f0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#é0"), Err(ColorFormatError::MalformedHex));

        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse("  #3498db\n")?, [0x34_u8, 0x98, 0xdb]);
        assert_eq!(parse(""), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse("   "), Err(ColorFormatError::UnknownFormat));
        Ok(())
    }
}
