//! Example: resolving schema constants for a mock status attestation
//!
//! Run with: cargo run --example mock_status

use credential_schema::{
    audit_report_types, endorsement_types, schema_id, status_reason_code,
    status_reason_descriptors, StatusValue,
};

fn main() {
    println!("Credential Schema Registry - Example Usage\n");
    println!("==============================================\n");

    // Step 1: Resolve the schema a status attestation indexes under
    println!("1️⃣  Resolving schema ids...");
    let status_schema = schema_id("StatusCredential").unwrap();
    let endorsement_schema = schema_id("EndorsementCredential").unwrap();
    let dispute_schema = schema_id("DisputeCredential").unwrap();
    println!("   StatusCredential      -> schema {}", status_schema);
    println!("   EndorsementCredential -> schema {}", endorsement_schema);
    println!("   DisputeCredential     -> schema {} (shared with endorsements)\n", dispute_schema);

    // Step 2: Enumerate the fixed value sets
    println!("2️⃣  Enumerating value sets...");
    println!("   Endorsement polarities: {:?}", endorsement_types());
    println!("   Audit report subtypes:  {:?}\n", audit_report_types());

    // Step 3: Pick the reason for a disputed subject
    println!("3️⃣  Building the disputed-status payload...");
    let current_status = StatusValue::Disputed;
    let descriptors = status_reason_descriptors();
    let descriptor = &descriptors[0];
    let code = status_reason_code(&descriptor.reason_type).unwrap();
    println!("   currentStatus: {}", current_status);
    println!("   statusReason:  {}", serde_json::to_string_pretty(descriptor).unwrap());
    println!("   wire code:     0x{:02x}\n", code);

    // Step 4: Unknown names fail instead of defaulting
    println!("4️⃣  Looking up an unregistered name...");
    match schema_id("NotARealCredential") {
        Ok(id) => println!("   unexpected schema {}", id),
        Err(e) => println!("   ✅ rejected: {}\n", e),
    }

    println!("==============================================");
    println!("✅ Mock attestation constants resolved!");
}
