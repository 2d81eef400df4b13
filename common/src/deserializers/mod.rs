pub mod empty_string_as_none;
pub mod float_from_string;
