use anyhow::Context;
use std::env;
use turtle_account_core::{AccountConfig, NetworkByte, NetworkResolver};

fn main() -> anyhow::Result<()> {
    turtle_account_core::init();
    let config = AccountConfig::from_env().context("loading account configuration")?;
    let resolver = NetworkResolver::new(config.network_table());

    println!("TurtleNetwork Account Core Network Configuration:\n");
    println!("  Default Network: {}", config.default_network.name());
    println!("  HTTP Timeout: {} ms", config.http_timeout_ms);
    for (byte, network) in resolver.table().iter() {
        let name = NetworkByte::from_byte(byte).map(|n| n.name()).unwrap_or("custom");
        println!("  {} (byte {}, code '{}'):", name, byte, network.code);
        println!("    Server: {}", network.server);
        println!(
            "    Client Origin: {}",
            network.client_origin.as_deref().unwrap_or("(not set)")
        );
        println!("    Matcher: {}", network.matcher.as_deref().unwrap_or("(not set)"));
    }

    for address in env::args().skip(1) {
        match resolver.resolve(&address) {
            Ok(Some(network)) => println!("\n  {} -> network '{}' ({})", address, network.code, network.server),
            Ok(None) => println!("\n  {} -> no matching network", address),
            Err(e) => println!("\n  {} -> {}", address, e),
        }
    }
    Ok(())
}
