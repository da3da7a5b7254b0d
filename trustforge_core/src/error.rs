use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TrustForgeError {
	#[error(transparent)]
	#[diagnostic(code(trustforge::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to load data file `{path}`: {reason}")]
	#[diagnostic(code(trustforge::data_file))]
	DataFile { path: String, reason: String },

	#[error("unsupported data file format: `{0}`")]
	#[diagnostic(
		code(trustforge::unsupported_format),
		help("supported formats: json, toml")
	)]
	UnsupportedDataFormat(String),

	#[error("no template found with id: `{0}`")]
	#[diagnostic(
		code(trustforge::unknown_template),
		help("run `trustforge templates` to list available template ids")
	)]
	UnknownTemplate(String),

	#[error("{count} placeholder(s) would remain unresolved: {tokens}")]
	#[diagnostic(
		code(trustforge::unresolved_placeholders),
		help("add the missing keys to the field map, or drop `--strict`")
	)]
	UnresolvedPlaceholders { count: usize, tokens: String },
}

pub type TrustForgeResult<T> = Result<T, TrustForgeError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
