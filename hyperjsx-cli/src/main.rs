//! CLI for the hyperjsx JSX rewriter.
use std::io::{Read, Write};

use clap::Parser;
use hyperjsx_cli::Args;

mod tracing_config;

fn main() {
	tracing_config::init_tracing();

	let args = Args::parse();

	let source = if let Some(ref entry) = args.entry_point {
		std::fs::read_to_string(entry).expect("failed to read entry point")
	} else {
		let mut str = String::with_capacity(4096);
		std::io::stdin()
			.read_to_string(&mut str)
			.expect("failed to read stdin");
		str
	};

	let result = match hyperjsx_cli::run(source, &args) {
		Ok(result) => result,
		Err(err) => {
			eprintln!("error: {err}");
			std::process::exit(1);
		}
	};

	for warning in &result.warnings {
		eprintln!("{warning}");
	}

	if !result.errors.is_empty() {
		for error in &result.errors {
			eprintln!("{error}");
		}
		eprintln!("\nexiting due to {} errors", result.errors.len());
		std::process::exit(1);
	}

	if let Some(output) = args.output {
		let mut fd = std::fs::File::create(&output).expect("failed to create output file");
		fd.write_all(result.code.as_bytes())
			.expect("failed to write to output");
		fd.write_all(b"\n").expect("failed to write to output");
	} else {
		let mut stdout = std::io::stdout().lock();
		stdout
			.write_all(result.code.as_bytes())
			.expect("failed to write to stdout");
		stdout.write_all(b"\n").expect("failed to write to stdout");
	}
}
