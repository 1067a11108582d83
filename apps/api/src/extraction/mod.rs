pub mod key_info;
pub mod pdf;
pub mod prompts;
