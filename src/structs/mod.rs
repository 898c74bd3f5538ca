pub mod element_struct;
pub mod routes_struct;
pub mod weapon_struct;
