//! Bakes backend settings from the environment (or a `.env` file) into the binary.
//! The browser build has no process environment to read at runtime.

const KEYS: [&str; 3] = ["BACKEND_APP_ID", "BACKEND_REQUIRES_AUTH", "BACKEND_SERVER_URL"];

fn main() {
    println!("cargo:rerun-if-changed=.env");
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let Ok(entries) = dotenvy::dotenv_iter() else {
        return;
    };

    for (key, value) in entries.flatten() {
        if KEYS.contains(&key.as_str()) && std::env::var(&key).is_err() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
