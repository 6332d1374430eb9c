//! Export helpers for CSV and JSON deployment artifacts.

pub mod schedule {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    const HEADER: &str =
        "satellite,release_time_s,release_time_h,slot_longitude_deg,periapsis_km,apoapsis_km,insertion_period_s,circularization_dv_m_s";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard release-schedule CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// CSV row emitted by the schedule exporter.
    #[derive(Debug, Clone)]
    pub struct Record {
        pub satellite: usize,
        pub release_time_s: f64,
        pub release_time_h: f64,
        pub slot_longitude_deg: f64,
        pub periapsis_km: f64,
        pub apoapsis_km: f64,
        pub insertion_period_s: f64,
        pub circularization_dv_m_s: f64,
    }

    impl Record {
        /// Serialize the record to CSV, matching the standard header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.3},{:.4},{:.2},{:.3},{:.3},{:.3},{:.3}",
                self.satellite,
                self.release_time_s,
                self.release_time_h,
                self.slot_longitude_deg,
                self.periapsis_km,
                self.apoapsis_km,
                self.insertion_period_s,
                self.circularization_dv_m_s,
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Write any serializable plan summary as pretty-printed JSON.
    pub fn write_json<T: Serialize>(path: &Path, summary: &T) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
