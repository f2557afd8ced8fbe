pub mod acquisition;
pub mod consts;
pub mod handlers;
pub mod requests;
pub mod responses;
#[cfg(test)]
mod tests;
