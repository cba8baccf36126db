mod lexicon;
mod load;
mod parse_rle;
mod parsed_pattern;
mod plaintext;

pub use lexicon::LexiconEntry;
pub use load::load_pattern_file;
pub use parse_rle::parse_rle;
pub use parsed_pattern::ParsedPattern;
pub use plaintext::parse_plaintext;
