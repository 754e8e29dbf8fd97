pub mod u001_document_qa;
