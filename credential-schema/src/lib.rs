//! # Credential Schema
//!
//! Schema-registry constants for the trust attestation indexing pipeline:
//! credential-type schema ids, endorsement polarities, audit-report subtypes,
//! and status reasons with their single-byte wire codes.
//!
//! ## Key Features
//! - **Fixed wire values**: schema ids and reason codes match the external
//!   indexing infrastructure exactly
//! - **Fail-fast lookups**: unknown names return typed errors, never defaults
//! - **Immutable tables**: static data only, shareable across threads without
//!   synchronization

pub mod reason;
pub mod registry;
pub mod types;

pub use reason::{StatusReason, StatusReasonDescriptor};
pub use registry::{
    audit_report_types, endorsement_types, schema_id, status_reason_code,
    status_reason_descriptors, RegistryError, ENDORSEMENT_TYPES,
};
pub use types::{AuditReportType, CredentialType, SchemaId, StatusValue};
