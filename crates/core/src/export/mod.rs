//! Export of rendered reports to paginated PDF.

pub mod error;
pub mod pdf;

pub use error::ExportError;
pub use pdf::{PdfExporter, paginate};
