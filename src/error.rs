use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("error reading input")]
	InputRead(#[source] io::Error),

	#[error("error reading input: line longer than {limit} bytes")]
	LineTooLong { limit: usize },

	/// `position` counts characters, not bytes, from the start of the line
	#[error("decoding failed, invalid input: {ch:?} at position {position} is not a hex digit")]
	InvalidHexDigit { ch: char, position: usize },
}
