mod registry_error;
mod supplier_error;

pub use registry_error::{RegistryError, RegistryResult};
pub use supplier_error::SupplierError;
