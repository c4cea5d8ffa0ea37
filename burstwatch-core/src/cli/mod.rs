pub mod conf;
pub mod scan;
