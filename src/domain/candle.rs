use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One bar of the detail chart. Field names follow the summary payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
    /// Open time, epoch milliseconds
    pub t: i64,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    pub c: f64,
}

impl OhlcPoint {
    pub fn new(t: i64, o: f64, h: f64, l: f64, c: f64) -> Self {
        Self { t, o, h, l, c }
    }

    pub fn get_type(&self) -> CandleType {
        if self.c >= self.o {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.o, self.c),
            CandleType::Bearish => (self.c, self.o),
        }
    }

    /// Lowest low and highest high across a run of candles.
    pub fn price_range(candles: &[OhlcPoint]) -> Option<(f64, f64)> {
        candles.iter().fold(None, |acc, c| match acc {
            None => Some((c.l, c.h)),
            Some((lo, hi)) => Some((lo.min(c.l), hi.max(c.h))),
        })
    }
}
