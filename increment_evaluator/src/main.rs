use increment_evaluator::{evaluate, parse_statements};

use anyhow::Result;

fn main() -> Result<()> {
    util::init_logging();

    let input = util::read_input_as_string()?;
    let statements = util::parse_prefix(&input, parse_statements)?;

    println!("{}", evaluate(&statements));

    Ok(())
}
