// src/bin/gen_access_token.rs
//! Prints an `Authorization` header value for a fresh random user.
use anyhow::Result;
use kiosk_core::application::ports::security::TokenManager;
use kiosk_core::config::AppConfig;
use kiosk_core::domain::identity::UserId;
use kiosk_core::infrastructure::security::token::JwtTokenManager;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let tokens = JwtTokenManager::new(config.access_token_secret(), config.token_ttl())?;

    let user_id = UserId::generate();
    let issued = tokens.issue(user_id).await?;
    eprintln!("user id: {user_id}, expires at {}", issued.expires_at.to_rfc3339());
    println!("Bearer {}", issued.token);
    Ok(())
}
