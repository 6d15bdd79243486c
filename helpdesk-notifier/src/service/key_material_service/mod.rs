mod key_material_service;
mod key_material_service_impl;

pub use key_material_service::*;
pub use key_material_service_impl::*;
