// Service layer for radep

pub mod deployer;
pub mod layout;
