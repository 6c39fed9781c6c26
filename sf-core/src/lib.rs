//! Client logic of SportFinder that does not depend on a browser.

pub mod dialog;
pub mod filter;
pub mod format;
pub mod geo;
pub mod jwt;
pub mod notification;
pub mod pagination;
pub mod sequence;
pub mod session;
pub mod usecases;
