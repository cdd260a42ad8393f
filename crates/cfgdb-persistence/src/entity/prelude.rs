pub use super::configuration_files::Entity as ConfigurationFiles;
pub use super::configurations::Entity as Configurations;
