//! # global-id
//!
//! Scheme-qualified business identifiers per ISO 6523.
//!
//! ## Design Principles
//!
//! - A [`GlobalId`] is a plain value: a scheme code plus an identifier string
//! - Construction and conversion never fail and never validate
//! - The rendered form is the identifier value; the scheme travels alongside
//! - A bare string always wraps with the unknown scheme `0000`
//! - Strict checks are opt-in through [`GlobalId::validate`]
//!
//! ## Scheme Codes
//!
//! | Code   | Scheme                       |
//! |--------|------------------------------|
//! | `0002` | SIRENE                       |
//! | `0009` | SIRET                        |
//! | `0021` | SWIFT (BIC)                  |
//! | `0060` | D-U-N-S Number               |
//! | `0088` | GS1 GLN                      |
//! | `0160` | GS1 GTIN / EAN               |
//! | `0177` | Odette                       |
//! | `0208` | Company number               |
//! | `0000` | Unknown                      |
//!
//! Any other code is carried verbatim as [`SchemeId::Other`].

mod error;
mod global_id;
pub mod gs1;
mod scheme;
mod validation;

pub use error::GlobalIdError;
pub use global_id::GlobalId;
pub use scheme::{scheme_codes, SchemeId, UnrecognizedCode};
