/// JSON scene documents.
pub mod document;
