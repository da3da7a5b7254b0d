use rstest::rstest;
use similar_asserts::assert_eq;

use super::*;

fn sample_trust_data() -> TrustWizardData {
	TrustWizardData {
		trust_type: "Revocable Living Trust".to_string(),
		name: "The Example Family Trust".to_string(),
		jurisdiction: "Wyoming".to_string(),
		settlor_name: "Jordan Example".to_string(),
		settlor_street: Some("100 Main St".to_string()),
		settlor_city: Some("Cheyenne".to_string()),
		settlor_state: Some("WY".to_string()),
		settlor_zip: Some("82001".to_string()),
		initial_trustee: "Casey Fiduciary".to_string(),
		successor_trustee: "Robin Successor".to_string(),
		beneficiaries: vec![Beneficiary {
			name: "Avery Example".to_string(),
			dob: "2001-01-01".to_string(),
			relationship: "child".to_string(),
		}],
		assets: "Brokerage account ending 4411".to_string(),
		..TrustWizardData::default()
	}
}

fn sample_iron_chain_data() -> IronChainData {
	IronChainData {
		trust_name: "The Anchor Business Trust".to_string(),
		trust_street: "1 Trust Way".to_string(),
		trust_city: "Cheyenne".to_string(),
		trust_state: "WY".to_string(),
		trust_zip: "82001".to_string(),
		holding_co_name: "Anchor Holdings LLC".to_string(),
		holding_co_street: "2 Holding Rd".to_string(),
		holding_co_city: "Cheyenne".to_string(),
		holding_co_state: "WY".to_string(),
		holding_co_zip: "82001".to_string(),
		operating_co_name: "Anchor Operations LLC".to_string(),
		operating_co_street: "3 Operating Ave".to_string(),
		operating_co_city: "Cheyenne".to_string(),
		operating_co_state: "WY".to_string(),
		operating_co_zip: "82001".to_string(),
		jurisdiction: "Wyoming".to_string(),
		principal_amount: None,
		interest_rate: None,
	}
}

#[test]
fn extraction_excludes_checkbox_glyphs() {
	let content = "Sign here: [X] yes [ ] no [x] maybe. Name: [Grantor Name].";
	let placeholders = extract_placeholders(content);
	assert_eq!(placeholders, vec!["Grantor Name".to_string()]);
}

#[test]
fn extraction_deduplicates_and_sorts() {
	let content = "[Zip] something [City] something else [Zip]";
	let placeholders = extract_placeholders(content);
	assert_eq!(placeholders, vec!["City".to_string(), "Zip".to_string()]);
}

#[test]
fn extraction_of_empty_content_is_empty() {
	assert!(extract_placeholders("").is_empty());
}

#[rstest]
#[case::unclosed("no closing [bracket here", Vec::<String>::new())]
#[case::empty_brackets("empty [] brackets", Vec::<String>::new())]
#[case::single_char("[a] is too short", Vec::<String>::new())]
#[case::trimmed("[  Trust Name  ]", vec!["Trust Name".to_string()])]
#[case::spaces_in_name("[Holding Co Name]", vec!["Holding Co Name".to_string()])]
fn extraction_edge_cases(#[case] content: &str, #[case] expected: Vec<String>) {
	assert_eq!(extract_placeholders(content), expected);
}

#[test]
fn empty_value_substitutes_filler() {
	let map = FieldMap::from([("Name".to_string(), String::new())]);
	let filled = fill_template("Hello [Name].", &map);
	assert_eq!(filled, format!("Hello {DEFAULT_FILLER}."));

	// Filling the already-filled output again is a no-op.
	let refilled = fill_template(&filled, &map);
	assert_eq!(refilled, filled);
}

#[test]
fn absent_key_leaves_token_literal() {
	let map = FieldMap::new();
	let filled = fill_template("Hello [Name].", &map);
	assert_eq!(filled, "Hello [Name].");
}

#[test]
fn date_auto_injection_uses_today() {
	let map = FieldMap::new();
	let filled = fill_template("[Date]", &map);
	assert_eq!(filled, today_long());
}

#[test]
fn date_auto_injection_does_not_mutate_caller_map() {
	let map = FieldMap::new();
	let _ = fill_template("[Date]", &map);
	assert!(map.is_empty());
}

#[test]
fn explicit_date_wins_over_injection() {
	let map = FieldMap::from([("Date".to_string(), "March 1, 2020".to_string())]);
	assert_eq!(fill_template("[Date]", &map), "March 1, 2020");
}

#[test]
fn keys_with_regex_metacharacters_substitute_literally() {
	let map = FieldMap::from([("Grantor (Trustee)".to_string(), "Jordan".to_string())]);
	let filled = fill_template("Signed: [Grantor (Trustee)]. Untouched: (Trustee)", &map);
	assert_eq!(filled, "Signed: Jordan. Untouched: (Trustee)");
}

#[test]
fn fill_is_deterministic_for_identical_inputs() {
	let template = find_template("rlt-master").expect("template exists");
	let map = build_trust_field_map("Revocable Living Trust", &sample_trust_data());

	let first = fill_template(&template.content, &map);
	let second = fill_template(&template.content, &map);
	assert_eq!(first, second);
}

#[test]
fn unresolved_placeholders_lists_gaps() {
	let map = FieldMap::from([("Trust Name".to_string(), "The Example Trust".to_string())]);
	let content = "[Trust Name] of [State], dated [Date].";
	assert_eq!(unresolved_placeholders(content, &map), vec!["State".to_string()]);
}

#[test]
fn catalog_ids_are_unique() {
	let mut ids: Vec<&str> = template_catalog().iter().map(|t| t.id).collect();
	let total = ids.len();
	ids.sort_unstable();
	ids.dedup();
	assert_eq!(ids.len(), total);
}

#[test]
fn every_selected_template_id_resolves() {
	let trust_data = sample_trust_data();

	for label in [
		"Business Trust",
		"Revocable Living Trust",
		"Irrevocable Asset Protection Trust",
		"Real Estate/Land Trust",
		"Bulletproof 508(c)(1)(A) Trust",
		"Something Unheard Of",
	] {
		let packet = generate_trust_packet(label, &trust_data);
		assert!(!packet.is_empty(), "empty packet for label {label}");
	}
}

#[rstest]
#[case("Business Trust", TrustProduct::Business)]
#[case("Statutory Business Trust", TrustProduct::Business)]
#[case("Revocable Living Trust", TrustProduct::Revocable)]
#[case("High Net Worth Estate Plan", TrustProduct::Revocable)]
#[case("Standard Revocable Living Trust", TrustProduct::Revocable)]
#[case("Iron Chain™ Asset Protection System", TrustProduct::Revocable)]
#[case("Irrevocable Asset Protection Trust", TrustProduct::Irrevocable)]
#[case("Real Estate/Land Trust", TrustProduct::LandTrust)]
#[case("Title-Holding Land Trust", TrustProduct::LandTrust)]
#[case("Bulletproof 508(c)(1)(A) Trust", TrustProduct::Bulletproof)]
#[case("My 508 Special", TrustProduct::Bulletproof)]
#[case("Mystery Trust", TrustProduct::Unrecognized)]
fn label_maps_to_product(#[case] label: &str, #[case] expected: TrustProduct) {
	assert_eq!(TrustProduct::from_label(label), expected);
}

#[test]
fn business_packet_selection_is_deterministic() {
	let packet = generate_trust_packet("Business Trust", &sample_trust_data());
	let titles: Vec<&str> = packet.iter().map(|d| d.title.as_str()).collect();

	let master = titles
		.iter()
		.position(|t| *t == "Statutory Business Trust Declaration")
		.expect("business trust master present");
	let cert = titles
		.iter()
		.position(|t| *t == "Certificate of Beneficial Interest")
		.expect("beneficial interest certificate present");

	assert!(master < cert);
	assert!(!titles.contains(&"Pour-Over Will"));
}

#[test]
fn executive_summary_leads_every_non_bulletproof_packet() {
	for label in [
		"Business Trust",
		"Revocable Living Trust",
		"Irrevocable Asset Protection Trust",
		"Real Estate/Land Trust",
		"Mystery Trust",
	] {
		let packet = generate_trust_packet(label, &sample_trust_data());
		assert_eq!(packet[0].title, "Structure Executive Summary");
	}

	let bulletproof = generate_trust_packet("Bulletproof 508(c)(1)(A) Trust", &sample_trust_data());
	assert!(
		bulletproof
			.iter()
			.all(|d| d.title != "Structure Executive Summary")
	);
}

#[test]
fn bulletproof_trust_packet_renders_dual_variants() {
	let packet = generate_trust_packet("Bulletproof 508(c)(1)(A) Trust", &sample_trust_data());

	assert_eq!(packet[0].title, PRIVATE_VARIANT_TITLE);
	assert_eq!(packet[1].title, BANKING_VARIANT_TITLE);

	let private = &packet[0].content;
	let banking = &packet[1].content;

	assert!(private.contains(COMMERCE_PROHIBITED_CLAUSE));
	assert!(banking.contains(COMMERCE_ALLOWED_CLAUSE));

	// The two renderings differ only in the commerce clause and its
	// description.
	let normalized = private
		.replace(COMMERCE_PROHIBITED_CLAUSE, COMMERCE_ALLOWED_CLAUSE)
		.replace(COMMERCE_PROHIBITED_DESCRIPTION, COMMERCE_ALLOWED_DESCRIPTION);
	assert_eq!(&normalized, banking);

	// The banking set is excluded on this path.
	assert!(packet.iter().all(|d| d.title != "Certification of Trust"));
}

#[test]
fn trustee_address_falls_back_to_settlor() {
	let data = sample_trust_data();
	let map = build_trust_field_map("Revocable Living Trust", &data);

	assert_eq!(map["Trustee Street"], "100 Main St");
	assert_eq!(map["Trustee City"], "Cheyenne");
	assert_eq!(map["Trustee State"], "WY");
	assert_eq!(map["Trustee Zip"], "82001");
}

#[test]
fn trustee_address_sub_fields_fall_back_independently() {
	let mut data = sample_trust_data();
	data.initial_trustee_street = Some("9 Fiduciary Ln".to_string());

	let map = build_trust_field_map("Revocable Living Trust", &data);

	assert_eq!(map["Trustee Street"], "9 Fiduciary Ln");
	assert_eq!(map["Trustee City"], "Cheyenne");
}

#[test]
fn missing_settlor_address_ends_in_filler() {
	let mut data = sample_trust_data();
	data.settlor_street = None;
	data.settlor_city = Some(String::new());

	let map = build_trust_field_map("Revocable Living Trust", &data);

	assert_eq!(map["Grantor Street"], DEFAULT_FILLER);
	assert_eq!(map["Grantor City"], DEFAULT_FILLER);
	assert_eq!(map["Trustee Street"], DEFAULT_FILLER);
}

#[test]
fn combined_address_joins_settlor_fields() {
	let map = build_trust_field_map("Revocable Living Trust", &sample_trust_data());
	assert_eq!(map["Address"], "100 Main St, Cheyenne, WY 82001");
}

#[test]
fn beneficiary_and_assets_have_phrase_defaults() {
	let mut data = sample_trust_data();
	data.beneficiaries.clear();
	data.assets = String::new();

	let map = build_trust_field_map("Revocable Living Trust", &data);

	assert_eq!(map["Beneficiary Name"], "The Beneficiaries");
	assert_eq!(map["Assets"], "Cash and Securities");
}

#[test]
fn successor_trustee_defaults_to_tbd() {
	let mut data = sample_trust_data();
	data.successor_trustee = String::new();

	let map = build_trust_field_map("Revocable Living Trust", &data);
	assert_eq!(map["Successor Trustee Name"], "TBD");
}

#[test]
fn iron_chain_packet_has_fixed_selection() {
	let packet = generate_iron_chain_packet(&sample_iron_chain_data());

	let titles: Vec<&str> = packet.iter().map(|d| d.title.as_str()).collect();
	assert_eq!(
		titles,
		vec![
			"Holding LLC Operating Agreement",
			"Operating LLC Operating Agreement",
			"Inter-Company Promissory Note",
			"Statutory Business Trust Declaration",
			"Certificate of Beneficial Interest",
			"Trustee Banking Resolution & Authority",
			"Resolution Authorizing Corporate Credit",
			"Minutes of Meeting of Trustees (Template)",
			"EIN Application Guide & Banking Instructions",
		]
	);
}

#[test]
fn iron_chain_note_uses_product_defaults() {
	let packet = generate_iron_chain_packet(&sample_iron_chain_data());
	let note = packet
		.iter()
		.find(|d| d.title == "Inter-Company Promissory Note")
		.expect("note present");

	assert!(note.content.contains("the principal sum of 100,000.00"));
	assert!(note.content.contains("at the rate of 5.0% per annum"));
}

#[test]
fn iron_chain_note_defaults_can_be_overridden() {
	let mut data = sample_iron_chain_data();
	data.principal_amount = Some("250,000.00".to_string());
	data.interest_rate = Some("7.5".to_string());

	let packet = generate_iron_chain_packet(&data);
	let note = packet
		.iter()
		.find(|d| d.title == "Inter-Company Promissory Note")
		.expect("note present");

	assert!(note.content.contains("the principal sum of 250,000.00"));
	assert!(note.content.contains("at the rate of 7.5% per annum"));
}

#[test]
fn iron_chain_addresses_land_in_llc_agreements() {
	let packet = generate_iron_chain_packet(&sample_iron_chain_data());
	let holding = &packet[0];
	let operating = &packet[1];

	assert!(holding.content.contains("2 Holding Rd, Cheyenne, WY 82001"));
	assert!(
		operating
			.content
			.contains("3 Operating Ave, Cheyenne, WY 82001")
	);
}

#[test]
fn bulletproof_packet_shape() {
	let data = BulletproofData {
		trust_name: "The Quiet Private Trust".to_string(),
		grantor_name: "Jordan Example".to_string(),
		trustee_name: "Casey Fiduciary".to_string(),
		successor_trustee_name: "Robin Successor".to_string(),
		state: "Texas".to_string(),
		street: "5 Situs Blvd".to_string(),
		city: "Austin".to_string(),
		zip: "78701".to_string(),
	};

	let packet = generate_bulletproof_packet(&data);
	let titles: Vec<&str> = packet.iter().map(|d| d.title.as_str()).collect();

	assert_eq!(
		titles,
		vec![
			PRIVATE_VARIANT_TITLE,
			BANKING_VARIANT_TITLE,
			"Bulletproof Trust EIN Guide",
			"Minutes of Meeting of Trustees (Template)",
			"Resolution Authorizing Corporate Credit",
		]
	);

	assert!(packet[0].content.contains("5 Situs Blvd, Austin, Texas 78701"));
	assert!(packet[0].content.contains("Robin Successor"));
}

#[rstest]
#[case(AssetCategory::RealProperty, "Schedule of Real Property (Schedule A)")]
#[case(AssetCategory::Aircraft, "Schedule of Aircraft (Schedule A)")]
#[case(AssetCategory::Equipment, "Schedule of Equipment (Schedule A)")]
#[case(AssetCategory::Vehicle, "Schedule of Vehicle (Schedule A)")]
fn asset_category_selects_schedule(#[case] category: AssetCategory, #[case] schedule_title: &str) {
	let data = AssetTransferData {
		category: Some(category),
		..AssetTransferData::default()
	};

	let packet = generate_asset_transfer_packet(&data, &sample_trust_data());
	let titles: Vec<&str> = packet.iter().map(|d| d.title.as_str()).collect();

	assert_eq!(
		titles,
		vec![
			schedule_title,
			"Assignment of Equitable Interest",
			"Trustee Resolution Accepting Property",
		]
	);
}

#[test]
fn unset_asset_category_omits_schedule() {
	let data = AssetTransferData::default();
	let packet = generate_asset_transfer_packet(&data, &sample_trust_data());

	let titles: Vec<&str> = packet.iter().map(|d| d.title.as_str()).collect();
	assert_eq!(
		titles,
		vec![
			"Assignment of Equitable Interest",
			"Trustee Resolution Accepting Property",
		]
	);
}

#[test]
fn vehicle_identification_formats_vin() {
	let data = AssetTransferData {
		category: Some(AssetCategory::Vehicle),
		vin: "1HGCM82633A004352".to_string(),
		year: "2021".to_string(),
		make_model: "Honda Accord".to_string(),
		..AssetTransferData::default()
	};

	assert_eq!(
		asset_identification(&data).as_deref(),
		Some("2021 Honda Accord, VIN 1HGCM82633A004352")
	);
}

#[test]
fn aircraft_identification_formats_tail_and_serial() {
	let data = AssetTransferData {
		category: Some(AssetCategory::Aircraft),
		tail_number: "N12345".to_string(),
		serial_number: "SER-991".to_string(),
		..AssetTransferData::default()
	};

	assert_eq!(
		asset_identification(&data).as_deref(),
		Some("Aircraft bearing FAA registration (tail) number N12345, serial number SER-991")
	);
}

#[rstest]
#[case::lease(false, true, "Lease")]
#[case::lien(true, false, "Lien")]
#[case::neither(false, false, "Lien")]
fn lien_or_lease_token(#[case] is_lien: bool, #[case] is_lease: bool, #[case] expected: &str) {
	let data = AssetTransferData {
		category: Some(AssetCategory::Vehicle),
		is_lien,
		is_lease,
		lender_name: "First Bank".to_string(),
		..AssetTransferData::default()
	};

	let packet = generate_asset_transfer_packet(&data, &sample_trust_data());
	let assignment = &packet[1];

	assert!(
		assignment
			.content
			.contains(&format!("subject to an existing {expected}"))
	);
}

#[test]
fn asset_transfer_uses_signed_date_when_present() {
	let data = AssetTransferData {
		category: Some(AssetCategory::Vehicle),
		date_signed: "February 2, 2024".to_string(),
		..AssetTransferData::default()
	};

	let packet = generate_asset_transfer_packet(&data, &sample_trust_data());
	assert!(packet[0].content.contains("DATE OF ENTRY: February 2, 2024"));
}

#[test]
fn trust_wizard_record_loads_from_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let path = tmp.path().join("trust.json");

	std::fs::write(
		&path,
		r#"{
			"type": "Business Trust",
			"name": "The Example Family Trust",
			"jurisdiction": "Wyoming",
			"settlorName": "Jordan Example",
			"settlorStreet": "100 Main St",
			"initialTrustee": "Casey Fiduciary"
		}"#,
	)?;

	let record: TrustWizardData = load_record(&path)?;
	assert_eq!(record.trust_type, "Business Trust");
	assert_eq!(record.settlor_street.as_deref(), Some("100 Main St"));
	assert!(record.settlor_city.is_none());

	Ok(())
}

#[test]
fn iron_chain_record_loads_from_toml() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let path = tmp.path().join("chain.toml");

	std::fs::write(
		&path,
		"trustName = \"The Anchor Business Trust\"\njurisdiction = \
		 \"Wyoming\"\nprincipalAmount = \"250,000.00\"\n",
	)?;

	let record: IronChainData = load_record(&path)?;
	assert_eq!(record.trust_name, "The Anchor Business Trust");
	assert_eq!(record.principal_amount.as_deref(), Some("250,000.00"));
	assert!(record.interest_rate.is_none());

	Ok(())
}

#[test]
fn unsupported_data_format_is_an_error() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let path = tmp.path().join("map.yaml");
	std::fs::write(&path, "Trust Name: nope\n")?;

	let result = load_field_map(&path);
	assert!(matches!(
		result,
		Err(TrustForgeError::UnsupportedDataFormat(ref ext)) if ext == "yaml"
	));

	Ok(())
}

#[test]
fn field_map_loads_from_json() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let path = tmp.path().join("map.json");
	std::fs::write(&path, r#"{"Trust Name": "The Example Trust"}"#)?;

	let map = load_field_map(&path)?;
	assert_eq!(map["Trust Name"], "The Example Trust");

	Ok(())
}
