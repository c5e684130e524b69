// Prints the market table in the terminal, using the same fetch and
// view logic as the GUI.

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Result;
    use clap::Parser;
    use itertools::Itertools;
    use tabled::{Table, Tabled, settings::Style};

    use coin_board::domain::{Currency, Preferences};
    use coin_board::models::{AssetRow, SortColumn, SortDirection};
    use coin_board::utils::{format_money, format_pct};
    use coin_board::{Cli, Dashboard, default_providers, fetch_market_summary};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Print the market summary as a table")]
    struct Args {
        #[command(flatten)]
        source: Cli,

        /// Fuzzy filter on name or symbol
        #[arg(long)]
        search: Option<String>,

        /// usd or vnd
        #[arg(long, default_value = "usd")]
        currency: Currency,

        /// rank, name, price, 1h, 24h, 7d, market_cap, volume, supply
        #[arg(long)]
        sort: Option<SortColumn>,

        #[arg(long, default_value_t = false)]
        desc: bool,

        /// Rows to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    }

    #[derive(Tabled)]
    struct SummaryRow {
        #[tabled(rename = "#")]
        rank: u32,
        #[tabled(rename = "Symbol")]
        symbol: String,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Price")]
        price: String,
        #[tabled(rename = "1h")]
        change_1h: String,
        #[tabled(rename = "24h")]
        change_24h: String,
        #[tabled(rename = "7d")]
        change_7d: String,
        #[tabled(rename = "Market Cap")]
        market_cap: String,
        #[tabled(rename = "Supply")]
        supply: String,
        #[tabled(rename = "Signals")]
        signals: String,
    }

    impl SummaryRow {
        fn new(row: &AssetRow<'_>, currency: Currency) -> Self {
            let a = row.asset;
            Self {
                rank: a.rank,
                symbol: a.symbol.clone(),
                name: a.name.clone(),
                price: format_money(currency, row.price),
                change_1h: format_pct(a.percent_change_1h),
                change_24h: format_pct(a.percent_change_24h),
                change_7d: format_pct(a.percent_change_7d),
                market_cap: format_money(Currency::Usd, a.market_cap_usd),
                supply: row.supply_pct.map(format_pct).unwrap_or_else(|| "-".to_string()),
                signals: a.signals.iter().join(", "),
            }
        }
    }

    pub async fn run() -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
        let args = Args::parse();

        let outcome = fetch_market_summary(&default_providers(&args.source)).await?;

        let prefs = Preferences {
            currency: args.currency,
            ..Default::default()
        };
        let mut board = Dashboard::new(prefs);
        board.apply_snapshot(outcome.summary, outcome.status, outcome.source);

        if let Some(query) = &args.search {
            board.set_search(query.as_str());
        }
        if let Some(column) = args.sort {
            let direction = if args.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            board.set_sort(Some((column, direction)));
        }
        board.set_page_len(args.limit);

        if let Some(snapshot) = board.snapshot() {
            let g = &snapshot.summary.global;
            println!(
                "[{}] {} | Market Cap {} | Volume {} | BTC Dominance {}",
                snapshot.status,
                snapshot.source,
                format_money(Currency::Usd, g.market_cap_usd),
                format_money(Currency::Usd, g.volume_24h_usd),
                format_pct(g.btc_dominance),
            );
            if let Some(as_of) = snapshot.summary.as_of {
                println!("Data as of {}", as_of.format("%Y-%m-%d %H:%M UTC"));
            }
        }

        let rows: Vec<SummaryRow> = board
            .page_rows()
            .iter()
            .map(|r| SummaryRow::new(r, args.currency))
            .collect();
        let shown = rows.len();

        println!("{}", Table::new(rows).with(Style::rounded()));
        println!("Showing {} of {} matching assets", shown, board.visible_count());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    native::run().await
}
