mod root;
mod stat;

pub use root::ScanError;
pub use stat::FileStatError;

pub type Result<T> = std::result::Result<T, ScanError>;
