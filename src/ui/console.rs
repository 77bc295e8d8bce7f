use std::io::Write;

use anyhow::{Context, Result};

use crate::analysis::{AnalysisResult, TimeframeLevels};
use crate::ui::utils::{format_levels, format_price};

/// Anything that can present a finished analysis.
pub trait ReportSink {
    fn render(&mut self, symbol: &str, result: &AnalysisResult) -> Result<()>;
}

/// Plain-text report written to any `Write` (stdout in the binary).
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        ConsoleReport { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_timeframe(&mut self, entry: &TimeframeLevels) -> Result<()> {
        let levels = &entry.levels;
        if let Some(reason) = &entry.failure {
            writeln!(self.out, "[{}] no data ({})", entry.label, reason)?;
            return Ok(());
        }

        writeln!(
            self.out,
            "[{}] last close: {}",
            entry.label,
            format_price(levels.last_close)
        )?;
        writeln!(
            self.out,
            "  Support:            {}",
            format_levels(&levels.support_levels)
        )?;
        writeln!(
            self.out,
            "  Resistance:         {}",
            format_levels(&levels.resistance_levels)
        )?;
        let [ma20, ma50, ma200] = levels.moving_averages;
        writeln!(
            self.out,
            "  MA20 / MA50 / MA200: {} / {} / {}",
            format_price(ma20),
            format_price(ma50),
            format_price(ma200)
        )?;
        writeln!(
            self.out,
            "  Recent swing high:  {}",
            format_price(levels.recent_swing_high)
        )?;
        writeln!(
            self.out,
            "  Recent swing low:   {}",
            format_price(levels.recent_swing_low)
        )?;
        Ok(())
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn render(&mut self, symbol: &str, result: &AnalysisResult) -> Result<()> {
        writeln!(self.out, "=== Key levels for {} ===", symbol)?;
        for entry in result.iter() {
            writeln!(self.out)?;
            self.render_timeframe(entry)
                .with_context(|| format!("Failed to render {} {}", symbol, entry.label))?;
        }
        self.out.flush().context("Failed to flush report")?;
        Ok(())
    }
}
