//! Source position tracking for rscss-check-rs.
//!
//! Selector diagnostics are produced with spans relative to the selector
//! text; the checker shifts them onto file offsets and the output layer
//! turns offsets into line/column pairs via [`LineIndex`].

mod line_index;
mod span;

pub use line_index::{LineCol, LineIndex};
pub use span::{ByteOffset, Span};
