// Module resolution with the node_modules conventions the bundler follows. It only answers
// "which file does this specifier name", loading the file is the caller's business.

mod error;
mod package_json;
mod resolver;

pub use crate::{error::ResolveError, package_json::PackageJson, resolver::Resolver};
