use std::fmt::{Display, Error, Formatter};
use std::time::Duration;

/// Statistics of a single query.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Number of input elements folded into the layers.
    pub num_elements: u64,
    /// Number of (layer, residue) entries that were populated once all elements were processed.
    pub num_entries: u64,
    /// Largest number of populated entries observed after processing an element.
    pub peak_entries: u64,
    /// Number of subsets stored, only non-zero when enumerating.
    pub num_witnesses: u64,
    /// Time spent processing elements.
    pub sweep_time: Duration,
}

impl Stats {
    pub(crate) fn record_sweep(&mut self, entries: u64, time: Duration) {
        self.num_elements += 1;
        self.num_entries = entries;
        self.peak_entries = self.peak_entries.max(entries);
        self.sweep_time += time;
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        fn label(f: &mut Formatter<'_>, label: &str) -> Result<(), Error> {
            write!(f, "{label:<20}: ")
        }
        fn val_throughput(f: &mut Formatter<'_>, value: u64, time: &Duration) -> Result<(), Error> {
            let secs = time.as_secs_f64();
            if secs > 0.0 {
                write!(f, "{:<12} ({:.0} /sec)", value, (value as f64) / secs)
            } else {
                write!(f, "{value:<12}")
            }
        }

        label(f, "elements")?;
        val_throughput(f, self.num_elements, &self.sweep_time)?;
        writeln!(f)?;

        label(f, "entries")?;
        writeln!(f, "{:<12}", self.num_entries)?;

        label(f, "peak entries")?;
        writeln!(f, "{:<12}", self.peak_entries)?;

        label(f, "witnesses")?;
        writeln!(f, "{:<12}", self.num_witnesses)?;

        label(f, "Sweep time")?;
        writeln!(f, "{:.6} s", self.sweep_time.as_secs_f64())?;
        Ok(())
    }
}
