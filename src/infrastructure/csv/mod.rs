// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// Menu dataset parsing

mod csv_parser;

pub use csv_parser::CsvParser;
