//! Configuration module

mod site;

pub use site::AkashaConfig;
pub use site::SiteConfig;
