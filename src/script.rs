use crate::linkedlist::LinkedList;
use anyhow::{anyhow, Result};
use regex::Regex;
use std::fmt::{self, Display};
use tracing::debug;

/*
 * One line of an operation script.
 */
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Push(String),
    Peek,
    Pop,
    Empty,
    Len,
}

/*
 * The result of running a single command against the list.
 */
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Pushed(String, bool),
    Peeked(Option<String>),
    Popped(Option<String>),
    Empty(bool),
    Len(usize),
}

fn or_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("<none>")
}

/*
 * Display <command> [args] -> <result>.
 */
impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pushed(value, ok) => write!(f, "push {} -> {}", value, ok),
            Outcome::Peeked(value) => write!(f, "peek -> {}", or_none(value)),
            Outcome::Popped(value) => write!(f, "pop -> {}", or_none(value)),
            Outcome::Empty(empty) => write!(f, "empty -> {}", empty),
            Outcome::Len(len) => write!(f, "len -> {}", len),
        }
    }
}

/*
 * Parse a script, one command per line :
 * push <value> | peek | pop | empty | len
 *
 * Blank lines and lines starting with '#' are ignored.
 */
pub fn parse(input: &str) -> Result<Vec<Command>> {
    let re = Regex::new(r"^(?:push\s+(\S.*)|(peek|pop|empty|len))$")?;
    let mut commands = vec![];

    for (i, l) in input.lines().enumerate() {
        let l = l.trim();
        if l.is_empty() || l.starts_with('#') {
            continue;
        }

        let captures = re
            .captures(l)
            .ok_or(anyhow!("Failed to parse line {} : {}", i + 1, l))?;
        let command = match (captures.get(1), captures.get(2).map(|m| m.as_str())) {
            (Some(value), _) => Command::Push(value.as_str().trim().to_string()),
            (None, Some("peek")) => Command::Peek,
            (None, Some("pop")) => Command::Pop,
            (None, Some("empty")) => Command::Empty,
            (None, Some("len")) => Command::Len,
            _ => return Err(anyhow!("Failed to parse line {} : {}", i + 1, l)),
        };
        commands.push(command);
    }

    debug!(count = commands.len(), "parsed script");
    Ok(commands)
}

/*
 * Replay <commands> in order against <list>.
 */
pub fn run(list: &mut LinkedList<String>, commands: Vec<Command>) -> Vec<Outcome> {
    commands
        .into_iter()
        .map(|command| match command {
            Command::Push(value) => {
                let ok = list.push(value.clone());
                Outcome::Pushed(value, ok)
            }
            Command::Peek => Outcome::Peeked(list.peek().cloned()),
            Command::Pop => Outcome::Popped(list.pop()),
            Command::Empty => Outcome::Empty(list.is_empty()),
            Command::Len => Outcome::Len(list.len()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        let input = "# comment
push 1

push  hello world
peek
pop
empty
len";
        let commands = parse(input).unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Push("1".to_string()),
                Command::Push("hello world".to_string()),
                Command::Peek,
                Command::Pop,
                Command::Empty,
                Command::Len,
            ]
        );
    }

    #[test]
    fn parse_rejects_unknown_command() {
        let err = parse("push 1\nshift").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse line 2 : shift");
    }

    #[test]
    fn parse_rejects_push_without_value() {
        assert!(parse("push").is_err());
    }

    #[test]
    fn run_scenario() {
        let input = "empty
push 1
peek
push 2
peek
len
pop
pop
pop
peek
empty";
        let mut list = LinkedList::new();
        let outcomes = run(&mut list, parse(input).unwrap());
        let lines: Vec<String> = outcomes.iter().map(|o| o.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "empty -> true",
                "push 1 -> true",
                "peek -> 1",
                "push 2 -> true",
                "peek -> 1",
                "len -> 2",
                "pop -> 1",
                "pop -> 2",
                "pop -> <none>",
                "peek -> <none>",
                "empty -> true",
            ]
        );
        assert!(list.is_empty());
    }
}
