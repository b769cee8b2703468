pub mod catalog;
pub mod invocation;
pub mod invoke_session;
pub mod reporter;

#[cfg(test)]
mod catalog_test;
