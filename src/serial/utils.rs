use crate::error::Error;

/// Decode a string of hex digit pairs into bytes. Spaces between pairs are
/// tolerated and stripped before validation.
pub fn hex_to_bytes(hex_str: &str) -> Result<Vec<u8>, Error> {
    let cleaned = hex_str.replace(' ', "");
    if let Some(bad) = cleaned.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::InvalidInput(format!("{bad:?} is not a hex digit")));
    }
    if cleaned.len() % 2 != 0 {
        return Err(Error::InvalidInput(format!(
            "odd number of hex digits ({})",
            cleaned.len()
        )));
    }

    (0..cleaned.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&cleaned[i..i + 2], 16)
                .map_err(|e| Error::InvalidInput(e.to_string()))
        })
        .collect()
}

/// Render bytes the way the exchange traces them: two lowercase hex digits
/// and a trailing space per byte.
pub fn bytes_to_hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x} ", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_hex::assert_eq_hex;
    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    #[rstest]
    #[case("55FF00", vec![0x55, 0xff, 0x00])]
    #[case("609f", vec![0x60, 0x9f])]
    #[case("55 ff 00", vec![0x55, 0xff, 0x00])]
    #[case("", vec![])]
    fn decodes_hex_payloads(#[case] input: &str, #[case] expected: Vec<u8>) {
        assert_eq_hex!(hex_to_bytes(input).unwrap(), expected);
    }

    #[rstest]
    #[case("5")]
    #[case("5G")]
    #[case("zz")]
    #[case("0x55")]
    fn rejects_malformed_payloads(#[case] input: &str) {
        assert!(matches!(hex_to_bytes(input), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn renders_lowercase_pairs_with_trailing_space() {
        assert_eq!(bytes_to_hex_string(&[0x55, 0xff, 0x00]), "55 ff 00 ");
        assert_eq!(bytes_to_hex_string(&[]), "");
    }

    #[quickcheck]
    fn hex_rendering_round_trips(bytes: Vec<u8>) -> bool {
        hex_to_bytes(&bytes_to_hex_string(&bytes)).unwrap() == bytes
    }
}
