pub mod bundle_output;
pub mod hot_update;

use std::sync::Arc;

use oxc_index::IndexVec;
use splitpack_common::{Asset, AssetIdx, ModuleIdx, NormalizedBundlerOptions};
use splitpack_ecmascript::EcmaAst;
use splitpack_fs::OsFileSystem;
use splitpack_resolver::Resolver;

pub type IndexAssets = IndexVec<AssetIdx, Asset>;
/// Parsed trees, parallel to the module table.
pub type IndexEcmaAst = IndexVec<ModuleIdx, EcmaAst>;

pub type SharedResolver = Arc<Resolver<OsFileSystem>>;
pub type SharedOptions = Arc<NormalizedBundlerOptions>;
