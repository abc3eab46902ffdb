//! Portfolio application: pages, navigation, and content data, built on
//! the shared `folio-ui` components.

pub mod components;
pub mod data;
pub mod route;
pub mod shell;
