//! Endpoint configuration.
//!
//! A CSR bundle has no runtime environment, so the two external base URLs are
//! baked in at build time. Override them with `REPORTS_API_URL` and
//! `POKEMON_TYPES_URL` when invoking the build.

/// Base URL of the reports backend.
pub fn reports_base() -> &'static str {
    option_env!("REPORTS_API_URL").unwrap_or("http://localhost:8000")
}

/// Base URL of the type enumeration service.
pub fn types_base() -> &'static str {
    option_env!("POKEMON_TYPES_URL").unwrap_or("https://pokeapi.co/api/v2")
}
