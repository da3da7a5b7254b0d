use serde::Deserialize;
use serde::Serialize;

/// A named beneficiary collected by the wizard.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Beneficiary {
	pub name: String,
	pub dob: String,
	pub relationship: String,
}

/// Wizard-collected data for a trust packet.
///
/// Granular address sub-fields are optional: a missing trustee sub-field
/// falls back to the settlor's corresponding sub-field, and a missing settlor
/// sub-field falls back to an underscored blank. Field names follow the
/// wizard's JSON shape (`settlorStreet`, `initialTrustee`, ...).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrustWizardData {
	/// The trust-type label chosen in the wizard, e.g. "Revocable Living
	/// Trust". Used as the packet label when the caller does not supply one.
	#[serde(rename = "type")]
	pub trust_type: String,
	/// The name of the trust itself, e.g. "The Smith Family Trust".
	pub name: String,
	/// Governing-law jurisdiction, feeding the `State` token.
	pub jurisdiction: String,

	pub settlor_name: String,
	pub settlor_street: Option<String>,
	pub settlor_city: Option<String>,
	pub settlor_state: Option<String>,
	pub settlor_zip: Option<String>,

	pub initial_trustee: String,
	pub initial_trustee_street: Option<String>,
	pub initial_trustee_city: Option<String>,
	pub initial_trustee_state: Option<String>,
	pub initial_trustee_zip: Option<String>,

	pub successor_trustee: String,

	pub beneficiaries: Vec<Beneficiary>,
	/// Free-text asset description for the residue clause.
	pub assets: String,
}

/// Input record for the Iron-Chain layered structure: a business trust
/// owning a holding company which owns an operating company.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IronChainData {
	pub trust_name: String,
	pub trust_street: String,
	pub trust_city: String,
	pub trust_state: String,
	pub trust_zip: String,

	pub holding_co_name: String,
	pub holding_co_street: String,
	pub holding_co_city: String,
	pub holding_co_state: String,
	pub holding_co_zip: String,

	pub operating_co_name: String,
	pub operating_co_street: String,
	pub operating_co_city: String,
	pub operating_co_state: String,
	pub operating_co_zip: String,

	pub jurisdiction: String,

	/// Principal for the inter-company promissory note. Defaults to the
	/// product value "100,000.00" when unset.
	pub principal_amount: Option<String>,
	/// Annual interest rate for the note. Defaults to "5.0" when unset.
	pub interest_rate: Option<String>,
}

/// Input record for the Bulletproof 508(c)(1)(A) private trust flow.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulletproofData {
	pub trust_name: String,
	pub grantor_name: String,
	pub trustee_name: String,
	pub successor_trustee_name: String,
	/// Situs state, also used as the governing-law jurisdiction.
	pub state: String,
	pub street: String,
	pub city: String,
	pub zip: String,
}

/// The category of property being moved into a trust. Selects which schedule
/// document the asset-transfer packet includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
	RealProperty,
	Aircraft,
	Equipment,
	Vehicle,
}

impl std::fmt::Display for AssetCategory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::RealProperty => write!(f, "real-property"),
			Self::Aircraft => write!(f, "aircraft"),
			Self::Equipment => write!(f, "equipment"),
			Self::Vehicle => write!(f, "vehicle"),
		}
	}
}

/// Input record for an asset-transfer packet. Category-specific sub-fields
/// feed the `Asset Identification` token; irrelevant sub-fields are ignored.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetTransferData {
	pub category: Option<AssetCategory>,

	// Real property
	pub address: String,
	pub legal_description: String,

	// Aircraft
	pub tail_number: String,
	pub serial_number: String,

	// Equipment
	pub equipment_description: String,

	// Vehicle
	pub vin: String,
	pub year: String,
	pub make_model: String,

	// Financing. The wizard sends both flags; `is_lien` is accepted for the
	// wire shape but only `is_lease` selects the encumbrance wording, since
	// the lien case and the unencumbered case both read "Lien".
	pub is_lien: bool,
	pub is_lease: bool,
	pub lender_name: String,
	pub account_number: String,

	/// Signing date written onto the documents in place of today's date.
	pub date_signed: String,
}
