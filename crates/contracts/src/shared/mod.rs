pub mod file_kind;
pub mod http_reply;
pub mod preview;
