//! Demo: Signed mobile widget URL
//!
//! Showcases: tenant credentials, widget builder, checksum signing
//!
//! Run: SAASQUATCH_TENANT_ALIAS=... SAASQUATCH_API_KEY=... cargo run --bin widget_url -- <user-id> <email> <first-name>

use colored::*;
use saasquatch_auth::{Credentials, Tenant};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let user_id = args.next().unwrap_or_else(|| "demo-user".to_string());
    let email = args.next().unwrap_or_else(|| "demo@example.com".to_string());
    let first_name = args.next().unwrap_or_else(|| "Demo".to_string());

    let tenant = Tenant::new(Credentials::from_env()?);

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  MOBILE WIDGET URL".cyan().bold());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let widget = tenant
        .mobile_widget(&user_id, &email, &first_name)
        .with_locale("en_US");

    println!("  Tenant:    {}", tenant.credentials().tenant_alias().cyan());
    println!("  User:      {}", user_id.cyan());
    println!("  Checksum:  {}", widget.checksum()?.yellow());
    println!();
    println!("  {}", "Signed URL".white().bold());
    println!("  {}", widget.build_url()?);
    println!();

    let unsigned = tenant
        .clone()
        .disable_secure_mode()
        .mobile_widget(&user_id, &email, &first_name)
        .build_url()?;
    println!("  {}", "Unsigned URL (secure mode off)".white().bold());
    println!("  {}", unsigned.dimmed());

    Ok(())
}
