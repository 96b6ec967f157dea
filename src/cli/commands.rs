use crate::domain::values::investor_profile::{InvestmentTerm, RiskAppetite};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finboard", about = "Personal finance ledger and forecast dashboard")]
pub struct Cli {
    /// User whose accounts and transactions are read or changed
    #[arg(long, global = true, env = "FINBOARD_USER", default_value = "local")]
    pub user: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides FINBOARD_BIND)
        #[arg(long)]
        bind: Option<std::net::SocketAddr>,
    },
    /// List accounts
    Accounts,
    /// Create an account
    AccountAdd { name: String },
    /// Rename an account
    AccountRename { id: String, name: String },
    /// Delete one or more accounts (and their transactions)
    AccountDelete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Add a transaction
    TxAdd {
        /// JSON with account_id, amount_cents, payee, date, category, notes
        json: String,
    },
    /// List transactions
    Txs {
        #[arg(long)]
        account: Option<String>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Delete one or more transactions
    TxDelete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Income, expenses and category breakdown for a period
    Summary {
        #[arg(long)]
        account: Option<String>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// List mutual fund scheme codes
    Funds,
    /// NAV history and forecast for a scheme
    Fund { code: String },
    /// Gold prices, forecast and buy/sell analysis
    Gold,
    /// Returns from buying and selling gold on predicted days
    GoldReturns {
        amount: f64,
        /// Index into the predicted series
        buy_day: usize,
        /// Index into the predicted series
        sell_day: usize,
    },
    /// List supported stock symbols
    Stocks,
    /// Stock history and forecast
    Stock { symbol: String },
    /// Ask the finance assistant
    Ask { query: String },
    /// Investment recommendations for a profile
    Recommend {
        /// low, medium or high
        #[arg(long, default_value = "medium")]
        risk: RiskAppetite,
        /// short, medium or long
        #[arg(long, default_value = "long")]
        term: InvestmentTerm,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        loan: Option<f64>,
        #[arg(long)]
        amount: Option<f64>,
    },
    /// Indian business headlines
    News,
    /// Index a filing's text for questions
    FilingIngest { ticker: String, file: PathBuf },
    /// Ask a question about an indexed filing
    FilingAsk { ticker: String, question: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_dates() {
        let cli = Cli::try_parse_from(["finboard", "summary", "--from", "2024-01-01", "--to", "2024-01-31"]).unwrap();
        match cli.command {
            Commands::Summary { from, to, account } => {
                assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 1));
                assert_eq!(to, NaiveDate::from_ymd_opt(2024, 1, 31));
                assert!(account.is_none());
            }
            _ => panic!("expected summary"),
        }
    }

    #[test]
    fn test_user_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["finboard", "accounts", "--user", "alice"]).unwrap();
        assert_eq!(cli.user, "alice");
    }

    #[test]
    fn test_recommend_parses_profile_fields() {
        let cli = Cli::try_parse_from(["finboard", "recommend", "--risk", "High", "--term", "short term", "--age", "30"]).unwrap();
        match cli.command {
            Commands::Recommend { risk, term, age, .. } => {
                assert_eq!(risk, RiskAppetite::High);
                assert_eq!(term, InvestmentTerm::Short);
                assert_eq!(age, Some(30));
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn test_delete_requires_ids() {
        assert!(Cli::try_parse_from(["finboard", "tx-delete"]).is_err());
    }
}
