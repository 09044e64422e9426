pub mod dashboard;
pub mod model_info;
pub mod predict;
