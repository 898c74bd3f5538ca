pub mod element_route;
pub mod index;
pub mod weapon_route;
