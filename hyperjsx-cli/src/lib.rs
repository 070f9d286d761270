//! High level CLI-as-a-library for the hyperjsx rewriter.
//!
//! This is directly called to by the `hyperjsx` CLI binary, and by the
//! integration tests. It parses the input (JSX source through oxc, or an
//! ESTree JSON document), rewrites it and serializes the result as ESTree
//! JSON.
use std::sync::Arc;

use clap::Parser;
use hyperjsx::{Options, Tree};
use serde::Deserialize;
use oxc::{
	allocator::Allocator,
	diagnostics::{OxcDiagnostic, Severity},
	semantic::SemanticBuilder,
	span::SourceType,
};
use tracing::debug;

/// The hyperjsx JSX rewriter.
#[derive(Debug, Default, Parser)]
#[command(name = "hyperjsx", version)]
pub struct Args {
	/// Where to write the rewritten ESTree JSON. Defaults to
	/// stdout; intermediate folders must exist
	#[arg(short = 'o', long = "output")]
	pub output: Option<String>,
	/// The factory function every element is rewritten to call
	/// (overrides `--options`)
	#[arg(short = 'f', long = "factory")]
	pub factory: Option<String>,
	/// Emit attribute keys as identifiers instead of string literals
	#[arg(long = "no-quote-prop-names")]
	pub no_quote_prop_names: bool,
	/// Emit lowercase tag names as identifiers instead of string literals
	#[arg(long = "no-quote-intrinsic")]
	pub no_quote_intrinsic: bool,
	/// Reserved; accepted for compatibility
	#[arg(long = "keep-comments")]
	pub keep_comments: bool,
	/// A JSON options object, e.g. `{"factory": "React.createElement"}`
	#[arg(long = "options")]
	pub options: Option<String>,
	/// Treat the input as an ESTree JSON document rather than JSX source
	#[arg(short = 'E', long = "estree")]
	pub estree: bool,
	/// Allow typescript syntax in the input
	#[arg(short = 'T', long = "typescript")]
	pub typescript: bool,
	/// Write compact JSON instead of pretty-printing it
	#[arg(short = 'c', long = "compact")]
	pub compact: bool,
	/// Treat warnings as errors
	#[arg(short = 'W')]
	pub warnings_as_errors: bool,
	/// The file to rewrite
	/// (defaults to stdin)
	pub entry_point: Option<String>,
}

impl Args {
	/// Resolves the rewrite options: the `--options` object first, then
	/// the individual flags on top of it.
	pub fn rewrite_options(&self) -> Result<Options, serde_json::Error> {
		let mut options = match self.options {
			Some(ref json) => serde_json::from_str(json)?,
			None => Options::default(),
		};
		if let Some(ref factory) = self.factory {
			options.factory.clone_from(factory);
		}
		if self.no_quote_prop_names {
			options.quote_prop_names = false;
		}
		if self.no_quote_intrinsic {
			options.quote_intrinsic = false;
		}
		if self.keep_comments {
			options.keep_comments = true;
		}
		Ok(options)
	}
}

/// The `Ok` result type for the [`run`] function.
#[derive(Debug, Default)]
pub struct Compilation {
	/// The rewritten tree as ESTree JSON.
	pub code: String,
	/// Any warnings
	pub warnings: Vec<String>,
	/// Any errors; if non-empty, `code` will be empty.
	pub errors: Vec<String>,
}

impl Compilation {
	/// Records the given diagnostics, returning how many of them are errors.
	fn report(&mut self, diagnostics: Vec<OxcDiagnostic>, source: &Arc<String>, args: &Args) -> usize {
		let mut errors = 0;
		for mut diagnostic in diagnostics {
			if args.warnings_as_errors {
				diagnostic = diagnostic.with_severity(Severity::Error);
			}

			if diagnostic.severity == Severity::Error {
				errors += 1;
				self.errors
					.push(format!("{:?}", diagnostic.with_source_code(Arc::clone(source))));
			} else {
				self.warnings
					.push(format!("{:?}", diagnostic.with_source_code(Arc::clone(source))));
			}
		}
		errors
	}
}

/// Runs the rewriter with the given arguments.
///
/// This is identical to running the hyperjsx CLI (except for parsing the
/// arguments and writing the output).
///
/// `Err` results indicate fatal errors that prevent the run from completing.
/// This does **not** include syntax errors or unsupported input, which are
/// included in the [`Compilation`] result.
pub fn run(source: String, args: &Args) -> Result<Compilation, Box<dyn std::error::Error>> {
	let mut result = Compilation::default();
	let options = args.rewrite_options()?;
	debug!(?options, estree = args.estree, "starting run");

	let mut tree = if args.estree {
		let document = match parse_document(&source) {
			Ok(document) => document,
			Err(err) => {
				result.errors.push(format!("invalid JSON input: {err}"));
				return Ok(result);
			}
		};
		match Tree::from_estree(&document) {
			Ok(tree) => tree,
			Err(err) => {
				result.errors.push(format!("invalid ESTree input: {err}"));
				return Ok(result);
			}
		}
	} else {
		match lower_source(source, args, &mut result)? {
			Some(tree) => tree,
			None => return Ok(result),
		}
	};

	if let Err(err) = hyperjsx::transform(&mut tree, &options) {
		result.errors.push(format!("rewrite failed: {err}"));
		return Ok(result);
	}

	let estree = tree.to_estree();
	result.code = if args.compact {
		serde_json::to_string(&estree)?
	} else {
		serde_json::to_string_pretty(&estree)?
	};

	Ok(result)
}

/// Parses an ESTree JSON document without a nesting limit; deeply nested
/// JSX produces deeply nested documents.
fn parse_document(source: &str) -> Result<serde_json::Value, serde_json::Error> {
	let mut deserializer = serde_json::Deserializer::from_str(source);
	deserializer.disable_recursion_limit();
	let document = serde_json::Value::deserialize(&mut deserializer)?;
	deserializer.end()?;
	Ok(document)
}

/// Parses JSX source with oxc and lowers it into a [`Tree`].
///
/// Returns `None` when errors were recorded in `result`.
fn lower_source(
	source: String,
	args: &Args,
	result: &mut Compilation,
) -> Result<Option<Tree>, Box<dyn std::error::Error>> {
	let source = Arc::new(source);

	let allocator = Allocator::default();
	let parse_result = oxc::parser::Parser::new(
		&allocator,
		&source,
		if args.typescript {
			SourceType::tsx()
		} else {
			SourceType::jsx()
		},
	)
	.parse();

	if parse_result.panicked || !parse_result.errors.is_empty() {
		if parse_result.errors.is_empty() {
			return Err("parser panicked, but no errors were reported".into());
		}

		if result.report(parse_result.errors, &source, args) > 0 {
			return Ok(None);
		}
	}

	let program = parse_result.program;

	let semantic = SemanticBuilder::new()
		.with_check_syntax_error(true)
		.build(&program);

	if !semantic.errors.is_empty() && result.report(semantic.errors, &source, args) > 0 {
		return Ok(None);
	}

	let lowered = hyperjsx::lower_program(&program);
	if !lowered.errors.is_empty() && result.report(lowered.errors, &source, args) > 0 {
		return Ok(None);
	}

	Ok(Some(lowered.tree))
}
