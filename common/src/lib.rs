pub mod date;
pub mod deserializers;
pub mod test_tools;
