use pair_frequency::{equal_pairs, parse_string};

use anyhow::Result;

fn main() -> Result<()> {
    util::init_logging();

    let input = util::read_input_as_string()?;
    let s = util::parse_input(&input, parse_string)?;

    println!("{}", equal_pairs(s));

    Ok(())
}
