pub mod registry_admin;

pub use registry_admin::RegistryAdmin;
