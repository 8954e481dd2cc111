pub mod commands;
pub mod value_enum;
