//! Contains the argument handling and main logic of the CLI

use std::io::{self, stdout, Write};

use anyhow::Context;
use clap::{Args, Parser, ValueEnum};
use exitcode::ExitCode;
use log::{debug, info};

use crate::codec;
use crate::util::line;

/// The only non-zero exit status, shared by usage, input and decoding errors
pub const FAILURE: ExitCode = 1;

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    long_about,
    after_long_help = "\
    1. Logging: is controlled via the XORHEX_LOG and XORHEX_LOG_STYLE environment variables. Set \
    XORHEX_LOG to error, warn, info, debug or trace to adjust verbosity. For examples, see \
    RUST_LOG and RUST_LOG_STYLE mentions in https://docs.rs/env_logger/0.10.0/env_logger/\
    \n\
    \n\
    2. Encoding gotcha: each XOR-ed byte is written as bare hex, so values below 0x10 take a \
    single digit and the output can no longer be decoded back reliably.\
    \n\
    \n\
    3. Decoding gotcha: whitespace is ignored and digits are paired up in order. An odd final \
    digit is dropped without an error."
)]
pub struct XorHex {
	#[clap(flatten)]
	pub global_opts: GlobalOpts,

	/// Whether to encode the input line into hex, or decode hex back
	#[arg(value_enum)]
	operation: Operation,

	/// Key each byte is XOR-ed with, a decimal number in 0-255
	#[arg(value_parser = parse_key, allow_negative_numbers = true)]
	key: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
	/// Trim the line, XOR it with the key and print it as hex
	Enc,

	/// Read the line as hex digit pairs and XOR each byte with the key
	Dec,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
	/// Verbosity level, can be specified multiple times, equivalent to XORHEX_LOG={info,debug,trace}
	#[arg(group="verbosity", long, short, global=true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Quiet mode, equivalent to XORHEX_LOG=error
	#[arg(group = "verbosity", long, short, global = true)]
	pub quiet: bool,

	/// Silent mode, equivalent to XORHEX_LOG=off
	#[arg(group = "verbosity", long, short, global = true)]
	pub silent: bool,
}

/// Accepts plain decimal digits only, so signs, whitespace and `_` separators are rejected
fn parse_key(arg: &str) -> Result<u8, String> {
	if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
		return Err(format!("invalid key {arg:?}, expected a decimal number in 0-255"));
	}
	arg.parse()
		.map_err(|_| format!("invalid key {arg:?}, out of range 0-255"))
}

impl XorHex {
	pub fn exec(self) -> anyhow::Result<()> {
		self.init_logging();

		info!("version {} starting up", env!("CARGO_PKG_VERSION"));
		info!("log level set to {}", log::max_level());

		let input = line::read_line(io::stdin().lock())?;
		debug!("{:?} with key {}, {} bytes of input", self.operation, self.key, input.len());

		let mut out = stdout().lock();
		let written = match self.operation {
			Operation::Enc => {
				let encoded = codec::encode(codec::trim(&input), self.key);
				debug!("encoded into {} hex digits", encoded.len());
				writeln!(out, "[ENC {}] => {}", self.key, encoded)
			}
			Operation::Dec => {
				let decoded = codec::decode(&String::from_utf8_lossy(&input), self.key)?;
				debug!("decoded {} bytes", decoded.len());
				write!(out, "[DEC {}] => ", self.key)
					.and_then(|()| out.write_all(&decoded))
					.and_then(|()| writeln!(out))
			}
		};
		written
			.and_then(|()| out.flush())
			.context("error writing output")?;

		info!("process exiting successfully");
		Ok(())
	}

	fn init_logging(&self) {
		let mut logging_builder = env_logger::Builder::new();

		logging_builder
			.filter_level(log::LevelFilter::Warn)
			.format_timestamp_nanos()
			.parse_env(
				env_logger::Env::new()
					.filter("XORHEX_LOG")
					.write_style("XORHEX_LOG_STYLE"),
			);

		// Not using https://crates.io/crates/clap-verbosity-flag as the documentation suggests
		// it may not work with the [default -> env -> cli-args] override path
		let override_log_level = if self.global_opts.silent {
			Some(log::LevelFilter::Off)
		} else if self.global_opts.quiet {
			Some(log::LevelFilter::Error)
		} else {
			match self.global_opts.verbose {
				0 => None,
				1 => Some(log::LevelFilter::Info),
				2 => Some(log::LevelFilter::Debug),
				_ => Some(log::LevelFilter::Trace),
			}
		};

		if let Some(new_level) = override_log_level {
			logging_builder.filter_level(new_level);
		}

		logging_builder.init();
	}
}

pub fn die(code: ExitCode, msg: &str) -> ! {
	log::error!("{}", msg);
	std::process::exit(code)
}
