use super::*;

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_defaults_when_blank() {
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 9000 ")).unwrap(), 9000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err().to_string();
    assert!(err.contains("invalid PORT: eighty"));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bind_addr_defaults() {
    assert_eq!(parse_bind_addr(None), DEFAULT_BIND_ADDR);
    assert_eq!(parse_bind_addr(Some("")), DEFAULT_BIND_ADDR);
}

#[test]
fn parse_bind_addr_reads_value() {
    assert_eq!(parse_bind_addr(Some("127.0.0.1")), "127.0.0.1");
}

#[test]
fn socket_addr_joins_host_and_port() {
    let cfg = ServerConfig { bind_addr: "127.0.0.1".into(), port: 4000 };
    assert_eq!(cfg.socket_addr(), "127.0.0.1:4000");
}

#[test]
fn from_env_reads_overrides() {
    // Only this test touches PORT/BIND_ADDR.
    unsafe {
        std::env::set_var("PORT", "3100");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { bind_addr: "127.0.0.1".into(), port: 3100 });

    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}
