pub use super::park::Entity as Park;
pub use super::trail::Entity as Trail;
