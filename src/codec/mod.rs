//! XOR of a line against a single-byte key, carried as lowercase hex

use log::debug;

use crate::error::Error;
use crate::util::hex;

/// Strips leading and trailing spaces, tabs and newlines. Other whitespace, e.g. `\r`, is kept.
pub fn trim(line: &[u8]) -> &[u8] {
	let is_trimmed = |b: &u8| matches!(*b, b' ' | b'\t' | b'\n');

	let Some(start) = line.iter().position(|b| !is_trimmed(b)) else {
		return &[];
	};
	let end = line.iter().rposition(|b| !is_trimmed(b)).map_or(start, |i| i + 1);

	&line[start..end]
}

/// XORs every byte of `message` with `key` and concatenates the unpadded hex form of each result.
///
/// Note that bytes which end up below `0x10` are written as a single digit. See
/// [`hex::push_unpadded`].
pub fn encode(message: &[u8], key: u8) -> String {
	let mut result = String::with_capacity(2 * message.len());
	for byte in message {
		hex::push_unpadded(&mut result, byte ^ key);
	}
	result
}

/// Parses `message` as hex digit pairs and XORs each resulting byte with `key`.
///
/// Whitespace is skipped anywhere, also between the two digits of a pair. An unpaired trailing
/// digit is dropped without error.
pub fn decode(message: &str, key: u8) -> Result<Vec<u8>, Error> {
	let mut result = Vec::with_capacity(message.len() / 2 + 1);
	let mut pair = [0u8; 2];
	let mut buffered = 0;

	for (position, ch) in message.chars().enumerate() {
		if ch.is_whitespace() {
			continue;
		}

		let Some(digit) = hex::val_of(ch) else {
			return Err(Error::InvalidHexDigit { ch, position });
		};

		if buffered == 2 {
			result.push(key ^ (pair[0] << 4 | pair[1]));
			buffered = 0;
		}
		pair[buffered] = digit;
		buffered += 1;
	}

	match buffered {
		2 => result.push(key ^ (pair[0] << 4 | pair[1])),
		1 => debug!("dropping unpaired trailing hex digit {:x}", pair[0]),
		_ => (),
	}

	Ok(result)
}

#[cfg(test)]
mod test {
	use super::*;

	const PRINTABLE: std::ops::RangeInclusive<u8> = 0x20..=0x7e;

	mod trim {
		use super::*;

		#[test]
		fn surrounding() {
			assert_eq!(trim(b"  hi\t\n"), b"hi");
		}

		#[test]
		fn inner_kept() {
			assert_eq!(trim(b"\th i\t"), b"h i");
		}

		#[test]
		fn only_whitespace() {
			assert_eq!(trim(b" \t\n "), b"");
			assert_eq!(trim(b""), b"");
		}

		#[test]
		fn carriage_return_kept() {
			assert_eq!(trim(b" hi\r "), b"hi\r");
		}
	}

	mod encode {
		use super::*;

		#[test]
		fn hi_key_1() {
			assert_eq!(encode(b"hi", 1), "6968");
		}

		#[test]
		fn trimmed_same_as_bare() {
			assert_eq!(encode(trim(b"  hi\t\n"), 0), encode(b"hi", 0));
		}

		#[test]
		fn empty() {
			assert_eq!(encode(b"", 42), "");
		}

		#[test]
		fn small_values_unpadded() {
			// 'a' ^ 0x61 == 0x00, 'b' ^ 0x61 == 0x03
			assert_eq!(encode(b"ab", 0x61), "03");
		}

		#[test]
		fn arbitrary_bytes() {
			assert_eq!(encode(&[0xff, 0x80, 0x10], 0), "ff8010");
		}
	}

	mod decode {
		use super::*;

		#[test]
		fn whitespace_between_pairs() {
			assert_eq!(decode("68 65 6c 6c 6f", 0).unwrap(), b"hello");
		}

		#[test]
		fn whitespace_inside_pair() {
			assert_eq!(decode("6 8\t6\u{3000}5", 0).unwrap(), b"he");
		}

		#[test]
		fn case_insensitive() {
			assert_eq!(
				decode("68656C6C6F", 0).unwrap(),
				decode("68656c6c6f", 0).unwrap()
			);
		}

		#[test]
		fn applies_key() {
			assert_eq!(decode("6968", 1).unwrap(), b"hi");
		}

		#[test]
		fn invalid_digit() {
			for key in [0, 1, 0x7f, 0xff] {
				assert!(matches!(
					decode("68g5", key),
					Err(Error::InvalidHexDigit { ch: 'g', position: 2 })
				));
			}
		}

		#[test]
		fn invalid_digit_after_valid_pairs() {
			assert!(matches!(
				decode("6868 68 -", 0),
				Err(Error::InvalidHexDigit { ch: '-', position: 8 })
			));
		}

		#[test]
		fn replacement_character_rejected() {
			assert!(decode(&String::from_utf8_lossy(b"68\xff"), 0).is_err());
		}

		#[test]
		fn odd_trailing_digit_dropped() {
			assert_eq!(decode("686", 0).unwrap(), b"h");
		}

		#[test]
		fn single_digit_dropped() {
			assert_eq!(decode("f", 0).unwrap(), b"");
		}

		#[test]
		fn empty() {
			assert_eq!(decode("", 7).unwrap(), b"");
			assert_eq!(decode(" \t ", 7).unwrap(), b"");
		}
	}

	mod round_trip {
		use super::*;

		#[test]
		fn printable_without_small_values() {
			for key in 0..=u8::MAX {
				let message: Vec<u8> = PRINTABLE.filter(|b| b ^ key >= 0x10).collect();
				assert_eq!(
					decode(&encode(&message, key), key).unwrap(),
					message,
					"key {key}"
				);
			}
		}

		#[test]
		fn small_values_break_round_trip() {
			for key in 0..=u8::MAX {
				let broken: Vec<u8> = PRINTABLE.filter(|b| b ^ key < 0x10).collect();
				if broken.is_empty() {
					continue;
				}
				assert_ne!(
					decode(&encode(&broken, key), key).unwrap(),
					broken,
					"key {key}"
				);
			}
		}

		#[test]
		fn small_value_in_the_middle() {
			// 'a' ^ 0x61 == 0x00 shifts every following digit by one
			let encoded = encode(b"xay", 0x61);
			assert_eq!(encoded, "19018");
			assert_eq!(decode(&encoded, 0x61).unwrap(), [0x19 ^ 0x61, 0x01 ^ 0x61]);
		}
	}
}
