use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Fill legal document templates and assemble complete trust packets.",
	long_about = "trustforge fills bracketed [Token] placeholders in a catalog of legal document \
	              templates and assembles the ordered document packets for several trust \
	              products.\n\nQuick start:\n  trustforge templates        List the template \
	              catalog\n  trustforge tokens <id>      Show a template's placeholder tokens\n  \
	              trustforge fill <id>        Fill one template from a field map\n  trustforge \
	              generate <kind>   Assemble a full packet"
)]
pub struct TrustForgeCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// List the template catalog.
	Templates,
	/// Print the placeholder tokens of a template.
	Tokens {
		/// Catalog template id to inspect.
		template_id: Option<String>,

		/// Read template content from a file instead of the catalog.
		#[arg(long, conflicts_with = "template_id")]
		file: Option<PathBuf>,
	},
	/// Fill a single template from a field-map data file.
	Fill {
		/// Catalog template id to fill.
		template_id: Option<String>,

		/// Read template content from a file instead of the catalog.
		#[arg(long, conflicts_with = "template_id")]
		file: Option<PathBuf>,

		/// JSON or TOML file holding the token-to-value field map.
		#[arg(long)]
		data: PathBuf,

		/// Fail when any placeholder would remain unresolved.
		#[arg(long, default_value_t = false)]
		strict: bool,

		/// Write the filled document here instead of stdout.
		#[arg(long)]
		out: Option<PathBuf>,
	},
	/// Generate a full document packet.
	#[command(subcommand)]
	Generate(GenerateCommands),
}

#[derive(Subcommand)]
pub enum GenerateCommands {
	/// Generate a trust packet for a product label.
	Trust {
		/// Trust-type label. Defaults to the `type` field of the input record.
		#[arg(long)]
		label: Option<String>,

		/// JSON or TOML trust wizard input record.
		#[arg(long)]
		input: PathBuf,

		/// Directory to write the packet documents into.
		#[arg(long)]
		out: PathBuf,
	},
	/// Generate the Iron-Chain layered-entity packet.
	IronChain {
		/// JSON or TOML iron-chain input record.
		#[arg(long)]
		input: PathBuf,

		/// Directory to write the packet documents into.
		#[arg(long)]
		out: PathBuf,
	},
	/// Generate the Bulletproof private trust packet.
	Bulletproof {
		/// JSON or TOML bulletproof input record.
		#[arg(long)]
		input: PathBuf,

		/// Directory to write the packet documents into.
		#[arg(long)]
		out: PathBuf,
	},
	/// Generate an asset-transfer packet against a parent trust.
	AssetTransfer {
		/// JSON or TOML asset-transfer input record.
		#[arg(long)]
		input: PathBuf,

		/// JSON or TOML record of the parent trust receiving the asset.
		#[arg(long)]
		trust: PathBuf,

		/// Directory to write the packet documents into.
		#[arg(long)]
		out: PathBuf,
	},
}
