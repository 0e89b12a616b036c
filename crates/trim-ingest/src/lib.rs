mod csv_table;

pub use csv_table::{read_raw_table, read_raw_table_from_reader};
