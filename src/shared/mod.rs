pub mod constants;
pub mod flash;
pub mod forms;
pub mod templates;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
