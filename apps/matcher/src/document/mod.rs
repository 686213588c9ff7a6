// Document intake: format-specific text extraction, normalization, section detection.
// Decoding is CPU-bound; callers on the async runtime run it inside spawn_blocking.

pub mod normalize;
pub mod reader;
pub mod sections;

pub use normalize::{clean_text, normalize_text};
pub use reader::{read_document, read_document_bytes, Document, DocumentFormat};
pub use sections::{detect_sections, Section};
