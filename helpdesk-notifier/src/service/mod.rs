pub mod feed_service;
pub mod key_material_service;
pub mod settings_service;
pub mod subscription_service;
pub mod toast_service;
