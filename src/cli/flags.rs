#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub hex: bool,
    pub upper_hex: bool,
    pub clipboard: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub charset: Option<String>,
    pub length: Option<i32>,
    pub min_length: Option<i32>,
    pub max_length: Option<i32>,
    pub min_lower: Option<i32>,
    pub min_upper: Option<i32>,
    pub min_digits: Option<i32>,
    pub min_special: Option<i32>,
    pub min_shuffle: Option<i32>,
    pub max_shuffle: Option<i32>,
    pub number: Option<usize>,
}
