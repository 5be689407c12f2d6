const HEX_CHAR: &[u8; 16] = b"0123456789abcdef";

/// Appends the lowercase hex form of `byte` to `out` without zero padding, i.e. values below
/// `0x10` produce a single digit.
///
/// Concatenated output is therefore ambiguous whenever such a value occurs, which the decoder's
/// fixed two-digit grouping cannot undo. Kept as is for output compatibility.
pub fn push_unpadded(out: &mut String, byte: u8) {
	if byte >> 4 != 0 {
		out.push(HEX_CHAR[(byte >> 4) as usize] as char);
	}
	out.push(HEX_CHAR[(byte & 0x0F) as usize] as char);
}

/// Value of a single hex digit, either case, or `None` for anything else
pub fn val_of(c: char) -> Option<u8> {
	match c.to_ascii_lowercase() {
		c @ '0'..='9' => Some(c as u8 - b'0'),
		c @ 'a'..='f' => Some(c as u8 - b'a' + 10),
		_ => None,
	}
}
