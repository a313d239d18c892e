pub mod date_time_ext;
pub mod path_ext;
