//! Config Guard Example
//!
//! Demonstrates checking a service configuration for unset fields before the
//! service starts:
//! - describing records with `describe_record!`
//! - strict versus lenient handling of unsupported field types
//! - shallow versus recursive checking of list elements
//! - reading the failing field's location from the error

use fieldcheck::prelude::*;
use std::collections::HashMap;

struct Listener {
    host: String,
    port: u16,
}

struct Upstream {
    name: String,
    weight: f32,
}

struct ServiceConfig {
    service: String,
    debug: bool,
    listener: Listener,
    upstreams: Vec<Upstream>,
    allowed_origins: Vec<String>,
    labels: HashMap<String, String>,
}

describe_record!(Listener {
    #[tag = "env:LISTEN_HOST"]
    host,
    #[tag = "env:LISTEN_PORT"]
    port,
});

describe_record!(Upstream { name, weight });

describe_record!(ServiceConfig {
    service,
    debug,
    listener,
    upstreams,
    allowed_origins,
    labels,
});

fn sample_config() -> ServiceConfig {
    ServiceConfig {
        service: "checkout".to_string(),
        debug: false,
        listener: Listener {
            host: "0.0.0.0".to_string(),
            port: 8080,
        },
        upstreams: vec![Upstream {
            name: "payments".to_string(),
            weight: 1.0,
        }],
        allowed_origins: vec!["https://shop.example".to_string()],
        labels: HashMap::new(),
    }
}

fn report(title: &str, result: Result<(), ValidationError>) {
    match result {
        Ok(()) => println!("  {}: ok", title),
        Err(err) => {
            println!("  {}: rejected at {}", title, err.dotted_path());
            for line in err.to_string().lines() {
                println!("      {}", line);
            }
        }
    }
}

fn main() {
    println!("=== Strict vs lenient ===");
    let config = sample_config();
    report("strict", validate(&config, false));
    report("lenient", validate(&config, true));

    println!("\n=== Missing listener port ===");
    let mut config = sample_config();
    config.listener.port = 0;
    report("lenient", validate(&config, true));

    println!("\n=== Empty origin in list ===");
    let mut config = sample_config();
    config.allowed_origins.push(String::new());
    report("lenient", validate(&config, true));

    println!("\n=== Upstream with zero weight ===");
    let mut config = sample_config();
    config.upstreams.push(Upstream {
        name: "fallback".to_string(),
        weight: 0.0,
    });
    let lenient = Validator::with_options(Options::lenient());
    report("shallow elements", lenient.validate(&config));
    report(
        "recursive elements",
        lenient
            .element_check(ElementCheck::Recursive)
            .validate(&config),
    );
}
