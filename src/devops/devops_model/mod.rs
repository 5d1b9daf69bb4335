pub mod build;
pub mod build_list;
pub mod build_result;
pub mod build_status;
