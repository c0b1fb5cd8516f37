/*
    Export subsystem - CSV output
*/

pub mod csv;

pub use csv::{to_csv, write_csv_file, ExportError, CSV_HEADER};
