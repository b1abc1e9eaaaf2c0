//! Batched CSV export of executed trades.
//!
//! Trades are buffered in memory and written out once the batch size is
//! reached, so file I/O stays off the submission path most of the time.
//! Dropping the logger flushes whatever is left.
//!
//! Output format, one line per trade:
//!
//! ```csv
//! buy_id,sell_id,price,quantity,timestamp_ns
//! ```
//!
//! Prices and quantities are rendered as decimals (trailing zeros trimmed).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::types::price::from_fixed_trimmed;
use crate::types::Trade;

/// Default number of trades buffered before a flush
pub const DEFAULT_BATCH_SIZE: usize = 4096;

/// Buffering CSV writer for trade records.
#[derive(Debug)]
pub struct TradeLogger {
    writer: BufWriter<File>,
    buffer: Vec<Trade>,
    batch_size: usize,
}

impl TradeLogger {
    /// Create a logger writing to `path`, truncating any existing file.
    ///
    /// The CSV header is written immediately.
    pub fn new(path: impl AsRef<Path>, batch_size: usize) -> io::Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "buy_id,sell_id,price,quantity,timestamp_ns")?;

        Ok(Self {
            writer,
            buffer: Vec::with_capacity(batch_size),
            batch_size,
        })
    }

    /// Buffer one trade, flushing if the batch is full
    pub fn push(&mut self, trade: Trade) -> io::Result<()> {
        self.buffer.push(trade);
        if self.buffer.len() >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Buffer a batch of trades
    pub fn append(&mut self, trades: &[Trade]) -> io::Result<()> {
        for trade in trades {
            self.push(trade.clone())?;
        }
        Ok(())
    }

    /// Write out all buffered trades
    pub fn flush(&mut self) -> io::Result<()> {
        for trade in &self.buffer {
            writeln!(
                self.writer,
                "{},{},{},{},{}",
                trade.buy_order_id,
                trade.sell_order_id,
                from_fixed_trimmed(trade.price),
                from_fixed_trimmed(trade.quantity),
                trade.timestamp,
            )?;
        }
        self.buffer.clear();
        self.writer.flush()
    }

    /// Number of trades currently buffered
    #[inline]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}

impl Drop for TradeLogger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
