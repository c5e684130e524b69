mod format_utils;
mod time_utils;

pub use format_utils::{format_money, format_number, format_pct, format_price, group_thousands};
pub use time_utils::{AppInstant, TimeUtils, epoch_ms_to_date_string, format_duration};
