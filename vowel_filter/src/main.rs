use vowel_filter::{consonant_code, parse_word};

use anyhow::Result;

fn main() -> Result<()> {
    util::init_logging();

    let input = util::read_input_as_string()?;
    let word = util::parse_input(&input, parse_word)?;

    println!("{}", consonant_code(word));

    Ok(())
}
