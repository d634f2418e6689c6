use std::path::PathBuf;

use crate::error::Error;
use crate::resolver::Kwarg;
use crate::resolver::tests::{dispatch_and_build, test_registry};
use crate::storage::{ClientStorage, DemoStorage, ServerLocator};

fn expect_client(uri: &str) -> ClientStorage {
    let registry = test_registry();
    let (storage, _) = dispatch_and_build(&registry, uri);
    storage
        .as_any()
        .downcast_ref::<ClientStorage>()
        .expect("not a client storage")
        .clone()
}

#[test]
fn test_tcp_default_port() {
    let client = expect_client("zeo://host");
    assert_eq!(
        client.locator(),
        &ServerLocator::Tcp {
            host: "host".to_string(),
            port: 9991,
        }
    );
}

#[test]
fn test_tcp_explicit_port() {
    let client = expect_client("zeo://host:1234");
    assert_eq!(
        client.locator(),
        &ServerLocator::Tcp {
            host: "host".to_string(),
            port: 1234,
        }
    );
}

#[test]
fn test_unix_socket_locator() {
    let client = expect_client("zeo:///var/sock");
    assert_eq!(
        client.locator(),
        &ServerLocator::Unix(PathBuf::from("/var/sock"))
    );
}

#[test]
fn test_ipv6_literal_host() {
    let client = expect_client("zeo://[::1]:8100");
    assert_eq!(
        client.locator(),
        &ServerLocator::Tcp {
            host: "::1".to_string(),
            port: 8100,
        }
    );

    let defaulted = expect_client("zeo://[::1]");
    assert_eq!(
        defaulted.locator(),
        &ServerLocator::Tcp {
            host: "::1".to_string(),
            port: 9991,
        }
    );
}

#[test]
fn test_backend_options_interpreted() {
    let client =
        expect_client("zeo://localhost:8100?debug=true&username=alice&wait=1&cache_size=1mb");
    assert_eq!(client.option("debug"), Some(&Kwarg::Int(1)));
    assert_eq!(
        client.option("username"),
        Some(&Kwarg::Str("alice".to_string()))
    );
    assert_eq!(client.option("wait"), Some(&Kwarg::Int(1)));
    assert_eq!(client.option("cache_size"), Some(&Kwarg::Bytes(1024 * 1024)));
}

#[test]
fn test_connection_params_left_over() {
    let registry = test_registry();
    let (_, leftover) =
        dispatch_and_build(&registry, "zeo://localhost?connection_cache_size=5000");
    assert_eq!(leftover.len(), 1);
    assert!(leftover.contains_key("connection_cache_size"));
}

#[test]
fn test_legacy_demostorage_flag() {
    let registry = test_registry();
    let (storage, _) = dispatch_and_build(&registry, "zeo://host?demostorage=yes");
    let demo = storage.as_any().downcast_ref::<DemoStorage>().unwrap();
    assert_eq!(demo.base().kind(), "client");
    assert_eq!(demo.changes().kind(), "memory");
}

#[test]
fn test_invalid_port_rejected() {
    let registry = test_registry();
    let err = registry.dispatch("zeo://host:http").unwrap_err();
    assert!(matches!(err, Error::Resolver(_)), "got {err}");
}
