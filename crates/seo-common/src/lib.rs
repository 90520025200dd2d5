pub mod error;
pub mod oracle;
pub mod textrazor;
