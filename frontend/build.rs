//! Forwards storage settings from the environment (or a `.env` file) to
//! `option_env!` in `src/config.rs`.

const FORWARDED: [&str; 3] = ["SUPABASE_URL", "SUPABASE_ANON_KEY", "SUPABASE_BUCKET"];

fn main() {
    // Load .env file (if present)
    if let Ok(path) = dotenvy::dotenv() {
        println!("cargo:rerun-if-changed={}", path.display());
    }

    for key in FORWARDED {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
