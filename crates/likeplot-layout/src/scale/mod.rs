//! Mappings from data values to canvas coordinates and colors.
//!
//! All scales are immutable once built; mapping the same value through the
//! same scale always yields the same result.
//!
//! - [`BandScale`]: ordered categories to equal-width pixel bands
//! - [`LinearScale`]: numbers to pixels by affine interpolation
//! - [`ColorScale`]: categories to palette colors by position

pub use self::{
    band::BandScale,
    color::ColorScale,
    linear::{LinearScale, Orientation, TickFormat},
};

mod band;
mod color;
mod linear;

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ScaleError {
    #[display("band padding must be within [0, 1), got {padding}")]
    InvalidPadding { padding: f64 },
    #[display("palette has {palette_len} colors but the domain has {domain_len} values")]
    PaletteTooShort {
        domain_len: usize,
        palette_len: usize,
    },
}
