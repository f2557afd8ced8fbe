pub mod consts;
pub mod errors;
pub mod machine;
pub mod models;
