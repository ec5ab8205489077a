use dragon_cfg::{Config, EnvResolver};

fn main() -> Result<(), dragon_cfg::Error> {
    // Reads APP_DATABASE_HOST, APP_DATABASE_PORT and APP_DATABASE_TLS.
    let root = Config::new("app", EnvResolver::new());
    let mut database = root.child("database");

    let host = database.may_get_string("host");
    let port = database.may_get_int("port");
    let tls = database.may_get_bool("tls");

    // Report every missing or malformed variable at once.
    database.ensure_no_errors()?;

    println!("Database: {host}:{port} (tls={tls})");

    Ok(())
}
