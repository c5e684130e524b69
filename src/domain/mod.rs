mod asset;
mod candle;
mod preferences;
mod summary;

pub use asset::Asset;
pub use candle::{CandleType, OhlcPoint};
pub use preferences::{Currency, Preferences, Theme, Timeframe};
pub use summary::{FeedStatus, GlobalStats, MarketSummary};
