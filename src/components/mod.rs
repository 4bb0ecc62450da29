pub mod lead_form;
pub mod reveal;
pub mod route_map;
