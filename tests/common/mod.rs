pub mod asserts;
pub mod builders;
pub mod context;
pub mod headers;
