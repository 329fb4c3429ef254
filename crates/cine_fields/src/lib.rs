//! # cinemeta field model
//!
//! Canonical four-field movie record, the labeled-line field extractor, and
//! the record validator.
//!
//! ## Core Responsibilities
//!
//! - **Record model**: the [`CanonicalRecord`] every decoder converges to,
//!   with the `"Not Available"` sentinel for fields that could not be found.
//! - **Normalization**: [`PartialRecord::into_canonical`] is the single place
//!   where absent or blank fields become the sentinel, so the record
//!   invariant (all four fields always present) holds independent of which
//!   decoder produced it.
//! - **Field extraction**: [`extract_fields`] scans unstructured text for the
//!   four labeled lines. It never fails; the worst case is a record where
//!   every field defaults.
//! - **Validation**: [`missing_fields`] reports which fields are still
//!   missing after extraction, in the fixed deficiency-report order.
//!
//! ## Example Usage
//!
//! ```
//! use cine_fields::{extract_fields, missing_fields, FieldLabel};
//!
//! let text = "Title: Inception\nDirector: Nolan\nProducer: Thomas";
//! let record = extract_fields(text).into_canonical();
//!
//! assert_eq!(record.title, "Inception");
//! assert_eq!(record.music_composer, "Not Available");
//! assert_eq!(missing_fields(&record), vec![FieldLabel::MusicComposer]);
//! ```

mod extract;
mod types;
mod validate;

pub use extract::extract_fields;
pub use types::{CanonicalRecord, FieldLabel, PartialRecord, NOT_AVAILABLE};
pub use validate::missing_fields;
