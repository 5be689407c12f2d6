use std::io::{BufRead, Read};

use log::trace;

use crate::error::Error;

/// Longest accepted line, not counting the line terminator. The 64 KiB read buffer has to hold
/// the `\n` too.
pub const MAX_LINE_LEN: usize = 64 * 1024 - 1;

/// Reads a single line from `reader`, without its `\n` or `\r\n` terminator. A lone `\r` at
/// the end of the stream is dropped as well.
///
/// An empty stream yields an empty line rather than an error.
pub fn read_line<R: BufRead>(reader: R) -> Result<Vec<u8>, Error> {
	let mut line = Vec::new();

	// One byte past the limit, so that an over-long line is distinguishable from one that ends
	// exactly at it
	reader
		.take(MAX_LINE_LEN as u64 + 1)
		.read_until(b'\n', &mut line)
		.map_err(Error::InputRead)?;

	if line.last() == Some(&b'\n') {
		line.pop();
	} else if line.len() > MAX_LINE_LEN {
		return Err(Error::LineTooLong {
			limit: MAX_LINE_LEN,
		});
	}

	if line.last() == Some(&b'\r') {
		line.pop();
	}

	trace!("read line of {} bytes", line.len());
	Ok(line)
}
