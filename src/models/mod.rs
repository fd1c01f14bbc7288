pub mod organization;

pub use organization::OrganizationModel;
