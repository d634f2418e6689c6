pub mod client_tests;
pub mod kwargs_tests;

use crate::registry::SchemeRegistry;
use crate::resolver::RawParams;
use crate::storage::Storage;

/// Fresh registry with the built-in schemes for resolver tests.
pub(crate) fn test_registry() -> SchemeRegistry {
    SchemeRegistry::builder().build()
}

/// Dispatch `uri` and build the resulting handle in one step.
pub(crate) fn dispatch_and_build(
    registry: &SchemeRegistry,
    uri: &str,
) -> (Box<dyn Storage>, RawParams) {
    let (factory, leftover) = registry.dispatch(uri).expect("dispatch failed");
    let storage = factory.build().expect("factory build failed");
    (storage, leftover)
}
