use advancement_counter::{parse_standings, Standings};

use anyhow::Result;

fn main() -> Result<()> {
    util::init_logging();

    let input = util::read_input_as_string()?;
    let (scores, k) = util::parse_input(&input, parse_standings)?;
    let standings = Standings::new(scores, k)?;

    println!("{}", standings.advancing());

    Ok(())
}
