//! Prints an argon2 PHC hash for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `hash-password <password>`

use anyhow::{anyhow, Result};

use auth_cell::PasswordService;

fn main() -> Result<()> {
    let password = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: hash-password <password>"))?;

    let hash = PasswordService::hash_password(&password).map_err(|e| anyhow!(e.to_string()))?;
    println!("{}", hash);
    Ok(())
}
