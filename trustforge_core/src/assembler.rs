use crate::AssetCategory;
use crate::AssetTransferData;
use crate::BulletproofData;
use crate::DEFAULT_FILLER;
use crate::FieldMap;
use crate::IronChainData;
use crate::TrustWizardData;
use crate::fill_template;
use crate::find_template;

/// A finished `{title, content}` pair. Titles come from the catalog entry,
/// except for the dual-variant private trust pair which carries fixed titles
/// of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
	pub title: String,
	pub content: String,
}

/// The closed set of trust products the assembler knows how to build. Parsed
/// from the free-form label the wizard hands over, so unrecognized labels
/// become an explicit [`TrustProduct::Unrecognized`] branch instead of an
/// implicit fallback-by-elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustProduct {
	Business,
	Revocable,
	Irrevocable,
	LandTrust,
	Bulletproof,
	Unrecognized,
}

impl TrustProduct {
	/// Map a human-readable trust-type label onto a product variant.
	pub fn from_label(label: &str) -> Self {
		match label {
			"Business Trust" | "Statutory Business Trust" => Self::Business,
			"Revocable Living Trust"
			| "High Net Worth Estate Plan"
			| "Standard Revocable Living Trust"
			| "Iron Chain™ Asset Protection System" => Self::Revocable,
			"Irrevocable Asset Protection Trust" => Self::Irrevocable,
			"Real Estate/Land Trust" | "Title-Holding Land Trust" => Self::LandTrust,
			other if other.contains("Bulletproof") || other.contains("508") => Self::Bulletproof,
			_ => Self::Unrecognized,
		}
	}
}

impl std::fmt::Display for TrustProduct {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Business => write!(f, "business trust"),
			Self::Revocable => write!(f, "revocable living trust"),
			Self::Irrevocable => write!(f, "irrevocable asset protection trust"),
			Self::LandTrust => write!(f, "land trust"),
			Self::Bulletproof => write!(f, "bulletproof private trust"),
			Self::Unrecognized => write!(f, "unrecognized (default packet)"),
		}
	}
}

/// The banking documents appended to every trust packet except the
/// Bulletproof path.
const STANDARD_BANKING_SET: &[&str] = &[
	"cert-trust-banking",
	"banking-resolution",
	"trust-minutes-initial",
	"trust-minutes-template",
	"ein-banking-guide",
	"credit-resolution",
];

/// Commerce-clause heading for the private-realm variant.
pub const COMMERCE_PROHIBITED_CLAUSE: &str = "PUBLIC COMMERCE PROHIBITED";
/// Commerce-clause heading for the banking variant.
pub const COMMERCE_ALLOWED_CLAUSE: &str = "PUBLIC COMMERCE ALLOWED";
/// Explanatory paragraph paired with [`COMMERCE_PROHIBITED_CLAUSE`].
pub const COMMERCE_PROHIBITED_DESCRIPTION: &str = "This Trust is specifically prohibited from \
                                               engaging in any form of public commerce. The \
                                               Corpus of this Trust can be utilized only in \
                                               private transactions of barter or other \
                                               non-monetary operations.";
/// Explanatory paragraph paired with [`COMMERCE_ALLOWED_CLAUSE`].
pub const COMMERCE_ALLOWED_DESCRIPTION: &str = "This Trust is specifically allowed to engage in \
                                            public commerce. The Corpus of this Trust can be \
                                            utilized in transactions of barter or other \
                                            monetary operations.";

/// Fixed title for the private-realm rendering of the dual-variant trust.
pub const PRIVATE_VARIANT_TITLE: &str = "Private Trust (Standard / Private Realm)";
/// Fixed title for the banking rendering of the dual-variant trust.
pub const BANKING_VARIANT_TITLE: &str = "Private Trust (With EIN / Banking)";

/// Default principal for the inter-company promissory note when the input
/// record does not override it.
pub const DEFAULT_NOTE_PRINCIPAL: &str = "100,000.00";
/// Default annual interest rate for the inter-company promissory note.
pub const DEFAULT_NOTE_INTEREST_RATE: &str = "5.0";

fn join_address(street: &str, city: &str, state: &str, zip: &str) -> String {
	format!("{street}, {city}, {state} {zip}")
}

fn or_filler(value: &Option<String>) -> String {
	match value {
		Some(v) if !v.is_empty() => v.clone(),
		_ => DEFAULT_FILLER.to_string(),
	}
}

fn or_default(value: &str, default: &str) -> String {
	if value.is_empty() {
		default.to_string()
	} else {
		value.to_string()
	}
}

/// Render one catalog template against a field map. Unknown ids are skipped
/// by the callers, keeping packet generation total.
fn render(id: &str, map: &FieldMap) -> Option<GeneratedDocument> {
	let template = find_template(id)?;

	Some(GeneratedDocument {
		title: template.title.to_string(),
		content: fill_template(&template.content, map),
	})
}

/// Render the dual-variant private trust pair: the same base template filled
/// twice against maps that differ only in the commerce-clause tokens, with
/// fixed titles so the two outputs are distinguishable in the packet.
fn private_trust_variants(id: &str, base: &FieldMap) -> Vec<GeneratedDocument> {
	let Some(template) = find_template(id) else {
		return vec![];
	};

	let mut private_map = base.clone();
	private_map.insert(
		"Commerce Clause".to_string(),
		COMMERCE_PROHIBITED_CLAUSE.to_string(),
	);
	private_map.insert(
		"Commerce Description".to_string(),
		COMMERCE_PROHIBITED_DESCRIPTION.to_string(),
	);

	let mut banking_map = base.clone();
	banking_map.insert(
		"Commerce Clause".to_string(),
		COMMERCE_ALLOWED_CLAUSE.to_string(),
	);
	banking_map.insert(
		"Commerce Description".to_string(),
		COMMERCE_ALLOWED_DESCRIPTION.to_string(),
	);

	vec![
		GeneratedDocument {
			title: PRIVATE_VARIANT_TITLE.to_string(),
			content: fill_template(&template.content, &private_map),
		},
		GeneratedDocument {
			title: BANKING_VARIANT_TITLE.to_string(),
			content: fill_template(&template.content, &banking_map),
		},
	]
}

/// The ordered template ids for one trust product.
fn trust_selection(product: TrustProduct) -> Vec<&'static str> {
	let mut ids: Vec<&'static str> = vec![];

	if product != TrustProduct::Bulletproof {
		ids.push("executive-summary");
	}

	match product {
		TrustProduct::Business => {
			ids.extend(["business-trust-master", "beneficial-interest-cert"]);
			ids.extend(STANDARD_BANKING_SET);
		}
		TrustProduct::Revocable => {
			ids.extend(["rlt-master", "pour-over-will", "assignment-master"]);
			ids.extend(STANDARD_BANKING_SET);
		}
		TrustProduct::Irrevocable => {
			ids.extend(["apt-master", "assignment-master"]);
			ids.extend(STANDARD_BANKING_SET);
		}
		TrustProduct::LandTrust => {
			ids.extend(["land-master", "assignment-master"]);
			ids.extend(STANDARD_BANKING_SET);
		}
		TrustProduct::Bulletproof => {
			ids.extend([
				"bulletproof-master",
				"bulletproof-ein-guide",
				"trust-minutes-template",
				"credit-resolution",
			]);
		}
		TrustProduct::Unrecognized => {
			ids.extend(["rlt-master", "pour-over-will"]);
			ids.extend(STANDARD_BANKING_SET);
		}
	}

	ids
}

/// Build the field map for a trust packet, applying the fallback chains:
/// trustee address sub-fields fall back independently to the settlor's, trust
/// situs fields fall back to the settlor's, and missing settlor sub-fields
/// end in the underscore filler.
pub fn build_trust_field_map(label: &str, data: &TrustWizardData) -> FieldMap {
	let g_street = or_filler(&data.settlor_street);
	let g_city = or_filler(&data.settlor_city);
	let g_state = or_filler(&data.settlor_state);
	let g_zip = or_filler(&data.settlor_zip);

	let t_street = data
		.initial_trustee_street
		.clone()
		.filter(|v| !v.is_empty())
		.unwrap_or_else(|| g_street.clone());
	let t_city = data
		.initial_trustee_city
		.clone()
		.filter(|v| !v.is_empty())
		.unwrap_or_else(|| g_city.clone());
	let t_state = data
		.initial_trustee_state
		.clone()
		.filter(|v| !v.is_empty())
		.unwrap_or_else(|| g_state.clone());
	let t_zip = data
		.initial_trustee_zip
		.clone()
		.filter(|v| !v.is_empty())
		.unwrap_or_else(|| g_zip.clone());

	// Combined form kept for templates written against the older
	// single-field convention.
	let full_settlor_address = join_address(&g_street, &g_city, &g_state, &g_zip);

	let beneficiary = data
		.beneficiaries
		.first()
		.map(|b| b.name.clone())
		.filter(|name| !name.is_empty())
		.unwrap_or_else(|| "The Beneficiaries".to_string());

	FieldMap::from([
		("Trust Type".to_string(), label.to_string()),
		("Trust Name".to_string(), data.name.clone()),
		("Grantor Name".to_string(), data.settlor_name.clone()),
		("Grantor/Creator".to_string(), data.settlor_name.clone()),
		("Trustee Name".to_string(), data.initial_trustee.clone()),
		(
			"Successor Trustee Name".to_string(),
			or_default(&data.successor_trustee, "TBD"),
		),
		("Address".to_string(), full_settlor_address),
		("State".to_string(), data.jurisdiction.clone()),
		("Beneficiary Name".to_string(), beneficiary),
		(
			"Assets".to_string(),
			or_default(&data.assets, "Cash and Securities"),
		),
		("Grantor Street".to_string(), g_street.clone()),
		("Grantor City".to_string(), g_city.clone()),
		("Grantor State".to_string(), g_state.clone()),
		("Grantor Zip".to_string(), g_zip.clone()),
		("Trustee Street".to_string(), t_street),
		("Trustee City".to_string(), t_city),
		("Trustee State".to_string(), t_state),
		("Trustee Zip".to_string(), t_zip),
		// Trust situs defaults to the grantor's address unless stated
		// otherwise.
		("Trust Street".to_string(), g_street),
		("Trust City".to_string(), g_city),
		("Trust State".to_string(), g_state),
		("Trust Zip".to_string(), g_zip),
	])
}

/// Assemble the ordered document packet for the trust product named by
/// `label`. Unknown labels fall back to a default packet; nothing here ever
/// fails.
pub fn generate_trust_packet(label: &str, data: &TrustWizardData) -> Vec<GeneratedDocument> {
	let product = TrustProduct::from_label(label);
	let map = build_trust_field_map(label, data);
	let mut packet: Vec<GeneratedDocument> = vec![];

	for id in trust_selection(product) {
		if id == "bulletproof-master" {
			packet.extend(private_trust_variants(id, &map));
		} else if let Some(doc) = render(id, &map) {
			packet.push(doc);
		}
	}

	packet
}

/// Assemble the fixed Iron-Chain packet: two LLC operating
/// agreements, the equity-strip note, the business trust master, the
/// beneficial interest certificate, and the banking documents.
pub fn generate_iron_chain_packet(data: &IronChainData) -> Vec<GeneratedDocument> {
	let selected = [
		"holding-llc-oa",
		"operating-llc-oa",
		"equity-strip-note",
		"business-trust-master",
		"beneficial-interest-cert",
		"banking-resolution",
		"credit-resolution",
		"trust-minutes-template",
		"ein-banking-guide",
	];

	let trust_address = join_address(
		&data.trust_street,
		&data.trust_city,
		&data.trust_state,
		&data.trust_zip,
	);
	let holding_address = join_address(
		&data.holding_co_street,
		&data.holding_co_city,
		&data.holding_co_state,
		&data.holding_co_zip,
	);
	let operating_address = join_address(
		&data.operating_co_street,
		&data.operating_co_city,
		&data.operating_co_state,
		&data.operating_co_zip,
	);

	let map = FieldMap::from([
		("Trust Name".to_string(), data.trust_name.clone()),
		("Holding Co Name".to_string(), data.holding_co_name.clone()),
		(
			"Operating Co Name".to_string(),
			data.operating_co_name.clone(),
		),
		("State".to_string(), data.jurisdiction.clone()),
		// The entities sign through roles here, not named individuals.
		("Trustee Name".to_string(), "The Trustee".to_string()),
		("Grantor Name".to_string(), "The Manager".to_string()),
		(
			"Amount".to_string(),
			data.principal_amount
				.clone()
				.filter(|v| !v.is_empty())
				.unwrap_or_else(|| DEFAULT_NOTE_PRINCIPAL.to_string()),
		),
		(
			"Interest Rate".to_string(),
			data.interest_rate
				.clone()
				.filter(|v| !v.is_empty())
				.unwrap_or_else(|| DEFAULT_NOTE_INTEREST_RATE.to_string()),
		),
		("Address".to_string(), trust_address),
		("Holding Co Address".to_string(), holding_address),
		("Operating Co Address".to_string(), operating_address),
		("Trust Street".to_string(), data.trust_street.clone()),
		("Trust City".to_string(), data.trust_city.clone()),
		("Trust State".to_string(), data.trust_state.clone()),
		("Trust Zip".to_string(), data.trust_zip.clone()),
		(
			"Holding Co Street".to_string(),
			data.holding_co_street.clone(),
		),
		("Holding Co City".to_string(), data.holding_co_city.clone()),
		(
			"Holding Co State".to_string(),
			data.holding_co_state.clone(),
		),
		("Holding Co Zip".to_string(), data.holding_co_zip.clone()),
		(
			"Operating Co Street".to_string(),
			data.operating_co_street.clone(),
		),
		(
			"Operating Co City".to_string(),
			data.operating_co_city.clone(),
		),
		(
			"Operating Co State".to_string(),
			data.operating_co_state.clone(),
		),
		(
			"Operating Co Zip".to_string(),
			data.operating_co_zip.clone(),
		),
	]);

	selected
		.iter()
		.filter_map(|id| render(id, &map))
		.collect()
}

/// Assemble the Bulletproof packet: the dual-variant private trust pair, the
/// setup guide, a blank minutes template, and the credit resolution.
pub fn generate_bulletproof_packet(data: &BulletproofData) -> Vec<GeneratedDocument> {
	let full_address = join_address(&data.street, &data.city, &data.state, &data.zip);

	let map = FieldMap::from([
		("Trust Name".to_string(), data.trust_name.clone()),
		("Grantor Name".to_string(), data.grantor_name.clone()),
		("Trustee Name".to_string(), data.trustee_name.clone()),
		(
			"Successor Trustee Name".to_string(),
			data.successor_trustee_name.clone(),
		),
		("State".to_string(), data.state.clone()),
		("Address".to_string(), full_address),
		("Trust Street".to_string(), data.street.clone()),
		("Trust City".to_string(), data.city.clone()),
		// Situs state is the jurisdiction for this product.
		("Trust State".to_string(), data.state.clone()),
		("Trust Zip".to_string(), data.zip.clone()),
	]);

	let mut packet = private_trust_variants("bulletproof-master", &map);

	for id in ["bulletproof-ein-guide", "trust-minutes-template", "credit-resolution"] {
		if let Some(doc) = render(id, &map) {
			packet.push(doc);
		}
	}

	packet
}

/// The schedule template id for an asset category.
fn schedule_id(category: AssetCategory) -> &'static str {
	match category {
		AssetCategory::RealProperty => "schedule-real-property",
		AssetCategory::Aircraft => "schedule-aircraft",
		AssetCategory::Equipment => "schedule-equipment",
		AssetCategory::Vehicle => "schedule-vehicle",
	}
}

/// Format the `Asset Identification` token from the category-specific
/// sub-fields of the input record.
pub fn asset_identification(data: &AssetTransferData) -> Option<String> {
	let category = data.category?;

	let text = match category {
		AssetCategory::RealProperty => {
			format!(
				"Real property located at {}; described as: {}",
				or_default(&data.address, DEFAULT_FILLER),
				or_default(&data.legal_description, DEFAULT_FILLER),
			)
		}
		AssetCategory::Aircraft => {
			format!(
				"Aircraft bearing FAA registration (tail) number {}, serial number {}",
				or_default(&data.tail_number, DEFAULT_FILLER),
				or_default(&data.serial_number, DEFAULT_FILLER),
			)
		}
		AssetCategory::Equipment => {
			format!(
				"Equipment described as: {}, serial number {}",
				or_default(&data.equipment_description, DEFAULT_FILLER),
				or_default(&data.serial_number, DEFAULT_FILLER),
			)
		}
		AssetCategory::Vehicle => {
			format!(
				"{} {}, VIN {}",
				or_default(&data.year, DEFAULT_FILLER),
				or_default(&data.make_model, DEFAULT_FILLER),
				or_default(&data.vin, DEFAULT_FILLER),
			)
		}
	};

	Some(text)
}

/// Assemble an asset-transfer packet against the parent trust record: the
/// category-specific schedule (omitted when the category is unset; the
/// caller may surface a warning), the equitable-interest assignment, and the
/// trustee acceptance resolution.
pub fn generate_asset_transfer_packet(
	data: &AssetTransferData,
	parent: &TrustWizardData,
) -> Vec<GeneratedDocument> {
	let lien_or_lease = if data.is_lease { "Lease" } else { "Lien" };

	let mut map = build_trust_field_map(&parent.trust_type, parent);
	map.insert(
		"Asset Identification".to_string(),
		asset_identification(data).unwrap_or_else(|| DEFAULT_FILLER.to_string()),
	);
	map.insert("Lien/Lease Type".to_string(), lien_or_lease.to_string());
	map.insert("Lender Name".to_string(), data.lender_name.clone());
	map.insert("Account Number".to_string(), data.account_number.clone());

	if !data.date_signed.is_empty() {
		map.insert("Date".to_string(), data.date_signed.clone());
	}

	let mut packet: Vec<GeneratedDocument> = vec![];

	if let Some(category) = data.category {
		if let Some(doc) = render(schedule_id(category), &map) {
			packet.push(doc);
		}
	}

	for id in ["equitable-assignment", "trustee-acceptance"] {
		if let Some(doc) = render(id, &map) {
			packet.push(doc);
		}
	}

	packet
}
