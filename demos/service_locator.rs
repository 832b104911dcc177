//! Uses a `TypeMap` as a small service locator.
//!
//! Each service type has exactly one slot, so registering a service is just
//! inserting it and resolving one is just asking for its type.
//!
//! Run with: `RUST_LOG=trace cargo run --example service_locator`

use log::info;
use typekey_map::{MapError, TypeMap};

struct DatabaseConfig {
    host: String,
    port: u16,
    database: String,
}

struct AppConfig {
    name: String,
    debug: bool,
}

#[derive(Default)]
struct AuditLog {
    entries: Vec<String>,
}

#[derive(Default)]
struct UserDirectory {
    users: Vec<String>,
}

fn create_user(services: &mut TypeMap, username: &str) -> Result<(), MapError> {
    let db = services.with(|cfg: &DatabaseConfig| format!("{}:{}", cfg.host, cfg.port))?;

    services
        .get_or_default::<UserDirectory>()
        .users
        .push(username.to_string());
    services
        .get_or_default::<AuditLog>()
        .entries
        .push(format!("created {} on {}", username, db));
    Ok(())
}

fn main() -> Result<(), MapError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut services = TypeMap::new();

    services.insert(DatabaseConfig {
        host: "localhost".to_string(),
        port: 5432,
        database: "myapp".to_string(),
    });
    services.insert(AppConfig {
        name: "MyApp".to_string(),
        debug: true,
    });

    create_user(&mut services, "alice")?;
    create_user(&mut services, "bob")?;

    // A second registration attempt keeps the running config
    let (config, registered) = services.emplace(AppConfig {
        name: "Other".to_string(),
        debug: false,
    });
    info!("config {} kept (registered again: {})", config.name, registered);

    services.with_mut(|cfg: &mut AppConfig| cfg.debug = false)?;

    services.with(|cfg: &AppConfig| {
        info!("app {} debug={}", cfg.name, cfg.debug);
    })?;
    services.with(|cfg: &DatabaseConfig| {
        info!("database {}:{}/{}", cfg.host, cfg.port, cfg.database);
    })?;

    let users = services.require::<UserDirectory>()?.users.len();
    info!("{} users registered", users);

    if let Some(log) = services.remove::<AuditLog>() {
        for entry in log.entries {
            info!("audit: {}", entry);
        }
    }

    services.clear();
    info!("services cleared: {}", services.is_empty());
    Ok(())
}
