pub mod database_service;
pub mod element_service;
pub mod rules_service;
pub mod seed_service;
pub mod weapon_service;
