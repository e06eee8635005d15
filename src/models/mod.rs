/// Sampled module sequence
pub mod bitstring;
/// Validated rendering geometry
pub mod geometry;
/// Monochrome pixel grid
pub mod grid;
/// Validated EAN-8 identifier
pub mod identifier;

pub use bitstring::SampledBitstring;
pub use geometry::BarcodeGeometry;
pub use grid::PixelGrid;
pub use identifier::Identifier;
