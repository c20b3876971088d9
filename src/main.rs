use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use derive_more::Display;
use graphstream::graph::{
    AdjacencyGraph, DirectedAdjacencyGraph, EdgeKind, Graph, MutableGraph,
    UndirectedAdjacencyGraph,
};
use itertools::Itertools;
use log::info;
use std::{error::Error, fmt, io::Read};

#[derive(Debug, Display, PartialEq)]
enum InputError {
    #[display(fmt = "line {}: expected two vertices, found {:?}", _0, _1)]
    MalformedLine(usize, String),
}

impl std::error::Error for InputError {}

/// Parses one `u v` edge per line. Blank lines and `#` comments are skipped.
fn parse_edges(input: &str) -> Result<Vec<(String, String)>, InputError> {
    input
        .lines()
        .enumerate()
        .map(|(no, line)| (no + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(no, line)| {
            line.split_whitespace()
                .collect_tuple()
                .map(|(u, v)| (u.to_string(), v.to_string()))
                .ok_or_else(|| InputError::MalformedLine(no, line.to_string()))
        })
        .collect()
}

fn read_edges(matches: &ArgMatches) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let input = match matches.value_of("FILE") {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input
        }
    };
    Ok(parse_edges(&input)?)
}

fn handle<K>(command: &str, graph: &AdjacencyGraph<String, K>) -> Result<(), Box<dyn Error>>
where
    K: EdgeKind<String>,
    K::Edge: fmt::Display,
{
    match command {
        "topsort" => println!("{}", graph.topsort()?.join(" ")),
        "acyclic" => println!("{}", graph.is_acyclic()),
        "cycles" => {
            for cycle in graph.cycles()? {
                println!("{}", cycle.join(" "));
            }
        }
        "edges" => println!("{}", graph),
        _ => unreachable!(),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let file = || {
        Arg::with_name("FILE").help("Reads `u v` edges from FILE instead of standard input")
    };
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("undirected")
                .help("Builds an undirected graph")
                .long("undirected")
                .short("u")
                .global(true)
                .takes_value(false),
        )
        .subcommand(
            SubCommand::with_name("topsort")
                .about("Prints a topological order of the vertices")
                .arg(file()),
        )
        .subcommand(
            SubCommand::with_name("acyclic")
                .about("Prints whether the graph is acyclic")
                .arg(file()),
        )
        .subcommand(
            SubCommand::with_name("cycles")
                .about("Prints every simple cycle, one per line")
                .arg(file()),
        )
        .subcommand(
            SubCommand::with_name("edges")
                .about("Prints the sorted edges")
                .arg(file()),
        )
        .get_matches();
    if let (command, Some(sub_matches)) = matches.subcommand() {
        let edges = read_edges(sub_matches)?;
        info!("read {} edges", edges.len());
        if matches.is_present("undirected") || sub_matches.is_present("undirected") {
            handle(command, &UndirectedAdjacencyGraph::from_edges(edges))?;
        } else {
            handle(command, &DirectedAdjacencyGraph::from_edges(edges))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edges() {
        let edges = parse_edges("a b\n\n# comment\n  b   c \n").unwrap();
        assert_eq!(
            edges,
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(
            parse_edges("a b\nc\n"),
            Err(InputError::MalformedLine(2, "c".to_string()))
        );
        assert!(parse_edges("a b c").is_err());
    }
}
