use std::path::Path;
use std::process;

use clap::Parser;
use trustforge_cli::Commands;
use trustforge_cli::GenerateCommands;
use trustforge_cli::TrustForgeCli;
use trustforge_core::AnyEmptyResult;
use trustforge_core::AnyResult;
use trustforge_core::AssetTransferData;
use trustforge_core::BulletproofData;
use trustforge_core::GeneratedDocument;
use trustforge_core::IronChainData;
use trustforge_core::TrustForgeError;
use trustforge_core::TrustWizardData;
use trustforge_core::extract_placeholders;
use trustforge_core::fill_template;
use trustforge_core::find_template;
use trustforge_core::generate_asset_transfer_packet;
use trustforge_core::generate_bulletproof_packet;
use trustforge_core::generate_iron_chain_packet;
use trustforge_core::generate_trust_packet;
use trustforge_core::load_field_map;
use trustforge_core::load_record;
use trustforge_core::template_catalog;
use trustforge_core::unresolved_placeholders;

fn main() {
	let args = TrustForgeCli::parse();
	let verbose = args.verbose;

	// Respect the NO_COLOR env var.
	let use_color = std::env::var_os("NO_COLOR").is_none();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Templates) => run_templates(verbose),
		Some(Commands::Tokens { template_id, file }) => run_tokens(template_id.as_deref(), file.as_deref()),
		Some(Commands::Fill {
			template_id,
			file,
			data,
			strict,
			out,
		}) => run_fill(template_id.as_deref(), file.as_deref(), &data, strict, out.as_deref()),
		Some(Commands::Generate(generate)) => run_generate(verbose, &generate),
		None => {
			eprintln!("No subcommand specified. Run `trustforge --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<TrustForgeError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("error: {e}");
			}
		}
		process::exit(2);
	}
}

/// Resolve template content from a catalog id or a file on disk.
fn resolve_content(template_id: Option<&str>, file: Option<&Path>) -> AnyResult<String> {
	if let Some(path) = file {
		return Ok(std::fs::read_to_string(path)?);
	}

	let Some(id) = template_id else {
		return Err("specify a template id or --file".into());
	};

	let template =
		find_template(id).ok_or_else(|| TrustForgeError::UnknownTemplate(id.to_string()))?;

	Ok(template.content.clone())
}

fn run_templates(verbose: bool) -> AnyEmptyResult {
	for template in template_catalog() {
		println!(
			"{:<24} {:<14} {:<9} {}",
			template.id, template.category, template.min_tier, template.title
		);

		if verbose {
			println!("    {}", template.description);
		}
	}

	Ok(())
}

fn run_tokens(template_id: Option<&str>, file: Option<&Path>) -> AnyEmptyResult {
	let content = resolve_content(template_id, file)?;

	for name in extract_placeholders(&content) {
		println!("{name}");
	}

	Ok(())
}

fn run_fill(
	template_id: Option<&str>,
	file: Option<&Path>,
	data: &Path,
	strict: bool,
	out: Option<&Path>,
) -> AnyEmptyResult {
	let content = resolve_content(template_id, file)?;
	let map = load_field_map(data)?;

	if strict {
		let unresolved = unresolved_placeholders(&content, &map);
		if !unresolved.is_empty() {
			return Err(
				TrustForgeError::UnresolvedPlaceholders {
					count: unresolved.len(),
					tokens: unresolved.join(", "),
				}
				.into(),
			);
		}
	}

	let filled = fill_template(&content, &map);

	if let Some(path) = out {
		std::fs::write(path, filled)?;
		println!("Wrote {}", path.display());
	} else {
		println!("{filled}");
	}

	Ok(())
}

fn run_generate(verbose: bool, command: &GenerateCommands) -> AnyEmptyResult {
	let (packet, out) = match command {
		GenerateCommands::Trust { label, input, out } => {
			let record: TrustWizardData = load_record(input)?;
			let label = label.clone().unwrap_or_else(|| record.trust_type.clone());
			(generate_trust_packet(&label, &record), out)
		}
		GenerateCommands::IronChain { input, out } => {
			let record: IronChainData = load_record(input)?;
			(generate_iron_chain_packet(&record), out)
		}
		GenerateCommands::Bulletproof { input, out } => {
			let record: BulletproofData = load_record(input)?;
			(generate_bulletproof_packet(&record), out)
		}
		GenerateCommands::AssetTransfer { input, trust, out } => {
			let record: AssetTransferData = load_record(input)?;
			let parent: TrustWizardData = load_record(trust)?;

			if record.category.is_none() {
				eprintln!("warning: no asset category set; the schedule document is omitted");
			}

			(generate_asset_transfer_packet(&record, &parent), out)
		}
	};

	write_packet(&packet, out, verbose)
}

/// Write packet documents as numbered text files so the packet ordering
/// survives on disk.
fn write_packet(packet: &[GeneratedDocument], out: &Path, verbose: bool) -> AnyEmptyResult {
	std::fs::create_dir_all(out)?;

	for (index, doc) in packet.iter().enumerate() {
		let file_name = format!("{:02}-{}.txt", index + 1, slugify(&doc.title));
		let path = out.join(&file_name);
		std::fs::write(&path, &doc.content)?;

		if verbose {
			println!("  {}", path.display());
		}
	}

	println!(
		"Generated {} document(s) in {}.",
		packet.len(),
		out.display()
	);

	Ok(())
}

/// Lowercase a document title into a safe file-name slug.
fn slugify(title: &str) -> String {
	let mut slug = String::with_capacity(title.len());
	let mut last_dash = true;

	for c in title.chars() {
		if c.is_ascii_alphanumeric() {
			slug.push(c.to_ascii_lowercase());
			last_dash = false;
		} else if !last_dash {
			slug.push('-');
			last_dash = true;
		}
	}

	while slug.ends_with('-') {
		slug.pop();
	}

	slug
}
