pub mod converters;
pub mod selection;
