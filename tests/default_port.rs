//! `PORT` handling. Kept in its own test binary since it mutates the
//! process environment.

use request_echo::config::{EchoConfig, PORT_ENV};

#[test]
fn test_port_from_environment() {
    std::env::remove_var(PORT_ENV);
    let config = EchoConfig::from_env();
    assert_eq!(config.listener.port, 8000);
    assert_eq!(config.listener.bind_address(), "0.0.0.0:8000");

    std::env::set_var(PORT_ENV, "0");
    assert_eq!(EchoConfig::from_env().listener.port, 8000);

    std::env::set_var(PORT_ENV, "not-a-port");
    assert_eq!(EchoConfig::from_env().listener.port, 8000);

    std::env::set_var(PORT_ENV, "8123");
    assert_eq!(EchoConfig::from_env().listener.port, 8123);

    std::env::remove_var(PORT_ENV);
}
