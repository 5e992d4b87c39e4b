//! Demo: Referral report for one account
//!
//! Showcases: account lookup, paginated referral listing, reward balances,
//! error classification
//!
//! Run: SAASQUATCH_TENANT_ALIAS=... SAASQUATCH_API_KEY=... cargo run --bin referral_report -- <account-id>

use colored::*;
use saasquatch_rest::{ListReferralsOptions, ListRewardBalancesOptions, RestError, SquatchClient};
use tracing_subscriber::EnvFilter;

const PAGE_SIZE: u32 = 50;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let account_id = std::env::args()
        .nth(1)
        .ok_or("usage: referral_report <account-id>")?;

    let client = SquatchClient::from_env()?;

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  REFERRAL REPORT".cyan().bold());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let account = match client.lookup_account(&account_id).await {
        Ok(account) => account,
        Err(e) if e.is_not_found() => {
            println!("  {} account {} does not exist", "✗".red(), account_id);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("  Account:   {} ({})", account.id.cyan(), account.currency);
    if let Some(code) = account.referral.as_ref() {
        println!("  Referred with code {}", code.code.yellow());
    }
    println!();

    // Referrals made by this account, one page at a time
    println!("{}", "  REFERRALS".white().bold());
    println!("  {}", "─".repeat(50));

    let mut offset = 0;
    loop {
        let options = ListReferralsOptions::default()
            .referring_account(&account.id)
            .page(PAGE_SIZE, offset);
        let page = client.list_referrals(&options).await?;

        for referral in &page.referrals {
            let user = &referral.referred_user;
            let score = referral.fraud_signals.total_score();
            let flag = if score > 50 { "!".red() } else { " ".normal() };
            println!(
                "  {} {:<24} {:<12} fraud score {:>3}",
                flag, user.email, referral.moderation_status, score
            );
        }

        offset += page.referrals.len() as u32;
        if page.referrals.is_empty() || i64::from(offset) >= page.total_count {
            break;
        }
    }
    println!();

    println!("{}", "  REWARD BALANCES".white().bold());
    println!("  {}", "─".repeat(50));

    match client
        .list_reward_balances(&ListRewardBalancesOptions::for_account(&account.id))
        .await
    {
        Ok(balances) => {
            for balance in balances {
                match balance.available_credit() {
                    Some(credit) => println!(
                        "  {:<14} {:>8} {}",
                        balance.reward_type,
                        credit.to_string().green(),
                        balance.unit.unwrap_or_default()
                    ),
                    None => println!(
                        "  {:<14} {:>8}%",
                        balance.reward_type,
                        balance.total_discount_percent.unwrap_or(0)
                    ),
                }
            }
        }
        Err(RestError::BadRequest) => println!("  {}", "balance query rejected".red()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
