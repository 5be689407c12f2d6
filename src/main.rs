mod cli;
mod codec;
mod error;
mod util;

use clap::error::ErrorKind;
use clap::Parser;

use crate::cli::{die, XorHex, FAILURE};

fn main() {
	let args = match XorHex::try_parse() {
		Ok(args) => args,
		Err(err) => match err.kind() {
			ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
			// clap would exit with 2 on usage errors
			_ => {
				// nothing left to report a failed stderr write to
				let _ = err.print();
				std::process::exit(FAILURE)
			}
		},
	};

	if let Err(err) = args.exec() {
		die(FAILURE, &format!("{err:#}"))
	}

	std::process::exit(exitcode::OK)
}
