mod cli;

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::Serialize;
use sqlx::PgConnection;

use konfig_store::{categories, choices, rules, templates};

use crate::cli::{CliArgs, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    konfig_core::config::load_dotenv();
    let args = CliArgs::parse();
    let config = konfig_core::Config::from_env();

    let pool = konfig_store::db::connect(&config.postgres)
        .await
        .context("failed to connect to PostgreSQL")?;

    // One transaction per command: reads see a consistent snapshot, writes
    // commit atomically or not at all.
    let mut tx = pool.begin().await?;
    run(&mut tx, args.command).await?;
    tx.commit().await?;
    Ok(())
}

async fn run(conn: &mut PgConnection, command: Command) -> Result<()> {
    match command {
        Command::CreateTemplate {
            str_id,
            name,
            base_price,
        } => {
            let row = templates::insert_template(conn, &str_id, &name, base_price).await?;
            print_json(&row)
        }

        Command::AddCategory {
            template,
            str_id,
            name,
        } => {
            let t = templates::find_template_by_str_id(conn, &template)
                .await?
                .ok_or_else(|| anyhow!("product template not found: '{}'", template))?;
            let row = categories::insert_category(conn, t.template_id, &str_id, &name).await?;
            print_json(&row)
        }

        Command::AddChoice {
            template,
            category,
            str_id,
            name,
            price_delta,
        } => {
            let t = templates::find_template_by_str_id(conn, &template)
                .await?
                .ok_or_else(|| anyhow!("product template not found: '{}'", template))?;
            let cat = categories::find_category_by_str_id(conn, t.template_id, &category)
                .await?
                .ok_or_else(|| {
                    anyhow!("option category not found in '{}': '{}'", template, category)
                })?;
            let row =
                choices::insert_choice(conn, cat.category_id, &str_id, &name, price_delta).await?;
            print_json(&row)
        }

        Command::AddRule {
            template,
            rule_type,
            primary,
            secondary,
        } => {
            let rule = konfig_engine::create_compatibility_rule(
                conn, &template, &rule_type, &primary, &secondary,
            )
            .await?;
            print_json(&rule)
        }

        Command::ShowRule { rule_id } => {
            let details = rules::find_rule_by_id(conn, rule_id)
                .await?
                .ok_or_else(|| anyhow!("compatibility rule not found: {}", rule_id))?;
            print_json(&details)
        }

        Command::AvailableOptions {
            template,
            category,
            selections,
        } => {
            let selections: HashMap<String, String> = selections.into_iter().collect();
            let options =
                konfig_engine::get_available_options(conn, &template, &category, &selections)
                    .await?;
            print_json(&options)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
