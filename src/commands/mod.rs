pub mod scan;
pub mod validate;
