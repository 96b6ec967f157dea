use clap::Parser;
use finboard::cli::commands::{Cli, Commands};
use finboard::config::Settings;
use finboard::domain::entities::transaction::NewTransaction;
use finboard::domain::ports::transaction_repository::TransactionFilter;
use finboard::domain::values::investor_profile::InvestorProfile;
use finboard::FinBoard;
use serde::Serialize;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading configuration: {e}");
            std::process::exit(1);
        }
    };

    let board = match FinBoard::new(&settings) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error initializing finboard: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(board, &settings, &cli.user, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_command(
    board: FinBoard,
    settings: &Settings,
    user: &str,
    cmd: Commands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve { bind } => {
            let addr = bind.unwrap_or(settings.bind);
            finboard::server::run(Arc::new(board), addr).await?;
        }
        Commands::Accounts => print_json(&board.accounts(user)?)?,
        Commands::AccountAdd { name } => print_json(&board.create_account(user, &name)?)?,
        Commands::AccountRename { id, name } => print_json(&board.rename_account(user, &id, &name)?)?,
        Commands::AccountDelete { ids } => print_json(&board.bulk_delete_accounts(user, &ids)?)?,
        Commands::TxAdd { json } => {
            let input: NewTransaction = serde_json::from_str(&json)?;
            print_json(&board.create_transaction(user, input)?)?;
        }
        Commands::Txs { account, from, to } => {
            let filter = TransactionFilter {
                account_id: account,
                from,
                to,
            };
            print_json(&board.transactions(user, &filter)?)?;
        }
        Commands::TxDelete { ids } => print_json(&board.bulk_delete_transactions(user, &ids)?)?,
        Commands::Summary { account, from, to } => print_json(&board.summary(user, from, to, account)?)?,
        Commands::Funds => print_json(&board.funds().await?)?,
        Commands::Fund { code } => print_json(&board.fund(&code).await?)?,
        Commands::Gold => print_json(&board.gold().await?)?,
        Commands::GoldReturns {
            amount,
            buy_day,
            sell_day,
        } => print_json(&board.gold_returns(amount, buy_day, sell_day).await?)?,
        Commands::Stocks => print_json(&board.stocks())?,
        Commands::Stock { symbol } => print_json(&board.stock(&symbol).await?)?,
        Commands::Ask { query } => println!("{}", board.ask(&query).await?),
        Commands::Recommend {
            risk,
            term,
            age,
            loan,
            amount,
        } => {
            let profile = InvestorProfile {
                risk_appetite: risk,
                term,
                age,
                loan,
                investment_amount: amount,
            };
            print_json(&board.recommend(&profile).await?)?;
        }
        Commands::News => print_json(&board.news().await?)?,
        Commands::FilingIngest { ticker, file } => {
            let text = std::fs::read_to_string(&file)?;
            let chunks = board.ingest_filing(&ticker, &text).await?;
            println!("Indexed {chunks} chunks for {}", ticker.trim().to_uppercase());
        }
        Commands::FilingAsk { ticker, question } => print_json(&board.ask_filing(&ticker, &question).await?)?,
    }
    Ok(())
}
