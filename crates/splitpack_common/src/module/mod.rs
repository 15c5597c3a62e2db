pub mod dependency_edge;
pub mod module_record;
