pub mod common;
pub mod u001_document_qa;
