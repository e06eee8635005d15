//! rust_ean8 - EAN-8 barcode codec for plain PBM images
//!
//! Encodes 8-digit EAN-8 identifiers into monochrome pixel grids and decodes
//! them back. The codec itself is pure and allocation-scoped; PBM (`P1`)
//! reading/writing and file helpers sit on top of it.
//!
//! ```
//! use rust_ean8::{BarcodeGeometry, decode, encode};
//!
//! let grid = encode("40123455", &BarcodeGeometry::default()).unwrap();
//! let decoded = decode(&grid).unwrap();
//! assert_eq!(decoded.text(), "40123455");
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Scan-line sampling, guard checks and digit lookup
pub mod decoder;
/// Pixel grid synthesis
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Identifier, BarcodeGeometry, PixelGrid, SampledBitstring)
pub mod models;
/// Plain PBM (P1) reader and writer
pub mod pbm;
/// Pattern tables and check digit arithmetic
pub mod symbology;
/// File helpers and batch decoding
pub mod tools;

pub use decoder::{DecodeOptions, Decoded, Sampling, decode, decode_with};
pub use encoder::{encode, encode_identifier};
pub use error::{
    DecodeError, EncodeError, GridError, Guard, IdentifierError, PbmError, Side, ToolError,
};
pub use models::{BarcodeGeometry, Identifier, PixelGrid, SampledBitstring};
pub use symbology::{check_digit, is_valid, validate};
