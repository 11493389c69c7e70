use std::{io, str::FromStr};

use anyhow::{anyhow, Result};
use miette::{GraphicalReportHandler, GraphicalTheme};
use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::{char, digit1, multispace0},
    combinator::{map_res, opt, recognize},
    sequence::{pair, preceded, terminated},
    IResult, Parser,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};

// Thanks to FasterThanLime! https://fasterthanli.me/series/advent-of-code-2022/part-11

pub type Span<'a> = LocatedSpan<&'a str>;

pub type ParseResult<'a, T> = IResult<Span<'a>, T, ErrorTree<Span<'a>>>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
struct BadInput<'a> {
    #[source_code]
    src: &'a str,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: String,
}

/// Skips leading whitespace (newlines included) before `inner`.
pub fn ws<'a, O, F>(inner: F) -> impl FnMut(Span<'a>) -> ParseResult<'a, O>
where
    F: Parser<Span<'a>, O, ErrorTree<Span<'a>>>,
{
    preceded(multispace0, inner)
}

pub fn parse_number<T>(i: Span) -> ParseResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    map_res(recognize(pair(opt(char('-')), digit1)), |s: Span| {
        s.fragment().parse::<T>()
    })(i)
}

/// One or more non-whitespace characters.
pub fn token(i: Span) -> ParseResult<Span> {
    take_till1(|c: char| c.is_whitespace())(i)
}

/// Like [`token`], but an empty word is accepted.
pub fn word(i: Span) -> ParseResult<Span> {
    take_till(|c: char| c.is_whitespace())(i)
}

fn locate(e: &ErrorTree<Span>) -> Option<(usize, String)> {
    match e {
        GenericErrorTree::Base { location, kind } => {
            Some((location.location_offset(), kind.to_string()))
        }
        GenericErrorTree::Stack { base, .. } => locate(base),
        GenericErrorTree::Alt(alts) => alts.iter().find_map(locate),
    }
}

fn bad_input(src: &str, e: &ErrorTree<Span>) -> anyhow::Error {
    let (offset, kind) = locate(e).unwrap_or_else(|| (0, "unparseable input".to_string()));
    let err = BadInput {
        src,
        bad_bit: (offset, 0).into(),
        kind,
    };
    let mut s = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    match handler.render_report(&mut s, &err) {
        Ok(()) => anyhow!("{s}"),
        Err(_) => anyhow!("{err} at offset {offset}: {}", err.kind),
    }
}

/// Runs `parse_fun` over the whole of `src`, allowing trailing whitespace.
///
/// On failure the error carries a rendered diagnostic that points at the
/// offending position in `src`.
pub fn parse_input<'a, T, F>(src: &'a str, parse_fun: F) -> Result<T>
where
    F: Parser<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let parsed: Result<T, ErrorTree<Span>> =
        final_parser(terminated(parse_fun, multispace0))(Span::new(src));

    parsed.map_err(|e| bad_input(src, &e))
}

/// Like [`parse_input`], but whatever follows the parsed prefix is ignored.
pub fn parse_prefix<'a, T, F>(src: &'a str, mut parse_fun: F) -> Result<T>
where
    F: Parser<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    match parse_fun.parse(Span::new(src)) {
        Ok((_, parsed)) => Ok(parsed),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(bad_input(src, &e)),
        Err(nom::Err::Incomplete(_)) => Err(anyhow!("bad input: incomplete")),
    }
}

pub fn read_input_as_string() -> Result<String> {
    io::read_to_string(io::stdin().lock()).map_err(anyhow::Error::msg)
}

/// Logs go to stderr; stdout only ever carries the answer.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
