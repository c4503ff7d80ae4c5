pub mod command;
pub mod query;

#[cfg(test)]
pub(crate) mod fake;
