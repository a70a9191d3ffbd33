//! Interactive play mode
//!
//! The player thinks of a word; the program guesses letters from the decision tree
//! and the player picks which pattern appeared.

use crate::core::Pattern;
use crate::solver::{Forest, Guess, Leaf, Node};
use std::io::{self, BufRead, Write};

/// Run the interactive mode on standard input and output
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_play(forest: &Forest) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(forest, stdin.lock(), stdout.lock())
}

/// Play games reading answers from `input` until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn play_session<R: BufRead, W: Write>(
    forest: &Forest,
    mut input: R,
    mut output: W,
) -> Result<(), String> {
    writeln!(output, "Think of a word. I will guess its letters.").map_err(|e| e.to_string())?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game\n")
        .map_err(|e| e.to_string())?;

    loop {
        match play_game(forest, &mut input, &mut output)? {
            GameEnd::Finished | GameEnd::Restart => {}
            GameEnd::Quit => {
                writeln!(output, "Thanks for playing!").map_err(|e| e.to_string())?;
                return Ok(());
            }
        }
    }
}

enum GameEnd {
    Finished,
    Restart,
    Quit,
}

enum Answer {
    Line(String),
    Restart,
    Quit,
}

fn play_game<R: BufRead, W: Write>(
    forest: &Forest,
    input: &mut R,
    output: &mut W,
) -> Result<GameEnd, String> {
    let (length, root) = loop {
        let line = match prompt(input, output, "Number of letters?")? {
            Answer::Line(line) => line,
            Answer::Restart => continue,
            Answer::Quit => return Ok(GameEnd::Quit),
        };
        match line.parse::<usize>() {
            Ok(length) => match forest.root(length) {
                Some(root) => break (length, root),
                None => say(output, &format!("I don't know any words of length {length}."))?,
            },
            Err(_) => say(output, "Please enter a number.")?,
        }
    };

    let mut pattern = Pattern::blank(length);
    let mut node = root;

    loop {
        let guess = match node {
            Node::Guess(guess) => guess,
            Node::Leaf(Leaf::Solved(word) | Leaf::Forced(word)) => {
                say(output, &format!("I guess {word}!"))?;
                return Ok(GameEnd::Finished);
            }
            Node::Leaf(Leaf::Abandoned) => {
                say(output, "I give up, you win!")?;
                return Ok(GameEnd::Finished);
            }
            Node::Empty => {
                say(output, "I win!")?;
                return Ok(GameEnd::Finished);
            }
        };

        let options = options(guess, &pattern);
        say(output, &format!("I guess '{}'", guess.letter))?;
        for (index, (option, _)) in options.iter().enumerate() {
            say(output, &format!("{index}) {option}"))?;
        }

        let (next, child) = loop {
            let line = match prompt(input, output, ">")? {
                Answer::Line(line) => line,
                Answer::Restart => return Ok(GameEnd::Restart),
                Answer::Quit => return Ok(GameEnd::Quit),
            };
            match line.parse::<usize>().ok().and_then(|index| options.get(index)) {
                Some(&choice) => break choice,
                None => {
                    let last = options.len() - 1;
                    say(output, &format!("Choose a number from 0 to {last}."))?;
                }
            }
        };

        if next.is_solved() {
            say(output, "I win!")?;
            return Ok(GameEnd::Finished);
        }
        pattern = next.clone();
        node = child;
    }
}

/// Outcomes of `guess` in book order: the no-match patterns first
fn options<'a>(guess: &'a Guess, pattern: &Pattern) -> Vec<(&'a Pattern, &'a Node)> {
    let mut options: Vec<_> = guess.children.iter().collect();
    options.sort_by_key(|(option, _)| !option.is_miss_from(pattern));
    options
}

fn say<W: Write>(output: &mut W, message: &str) -> Result<(), String> {
    writeln!(output, "{message}").map_err(|e| e.to_string())
}

/// Read one answer; end of input counts as quitting
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Answer, String> {
    write!(output, "{text} ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(Answer::Quit);
    }

    Ok(match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Answer::Quit,
        "new" | "n" => Answer::Restart,
        other => Answer::Line(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::TreeBuilder;

    fn forest() -> Forest {
        let words: Vec<Word> = [("cat", 5), ("car", 3), ("can", 2), ("cats", 1)]
            .iter()
            .map(|&(text, weight)| Word::new(text, weight).unwrap())
            .collect();
        TreeBuilder::default().build_forest(&words).forest
    }

    fn play(script: &str) -> String {
        let mut output = Vec::new();
        play_session(&forest(), script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn guesses_down_to_a_word() {
        // miss on t, miss on r
        let transcript = play("3\n0\n0\n");

        assert!(transcript.contains("I guess 't'"));
        assert!(transcript.contains("0) ___"));
        assert!(transcript.contains("1) __t"));
        assert!(transcript.contains("I guess 'r'"));
        assert!(transcript.contains("I guess can!"));
        assert!(transcript.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn hit_leads_to_word_guess() {
        let transcript = play("3\n1\nquit\n");
        assert!(transcript.contains("I guess cat!"));
        assert!(!transcript.contains("I guess 'r'"));
    }

    #[test]
    fn single_word_length() {
        let transcript = play("4\n");
        assert!(transcript.contains("I guess cats!"));
    }

    #[test]
    fn spaced_misses_are_offered_first() {
        // every letter misses two of the three words
        let words: Vec<Word> = [("x a", 3), ("y b", 2), ("zcd", 1)]
            .iter()
            .map(|&(text, weight)| Word::new(text, weight).unwrap())
            .collect();
        let forest = TreeBuilder::default().build_forest(&words).forest;
        let Some(Node::Guess(guess)) = forest.root(3) else {
            panic!("root should guess a letter");
        };

        let blank = Pattern::blank(3);
        let listed = options(guess, &blank);
        assert_eq!(guess.letter, 'a');
        assert_eq!(listed.len(), 3);
        assert!(listed[0].0.is_miss_from(&blank));
        assert!(listed[1].0.is_miss_from(&blank));
        assert_eq!(listed[2].0.as_str(), "_ a");
    }

    #[test]
    fn rejects_bad_answers() {
        let transcript = play("seven\n9\n3\n5\nnew\nq\n");

        assert!(transcript.contains("Please enter a number."));
        assert!(transcript.contains("I don't know any words of length 9."));
        assert!(transcript.contains("Choose a number from 0 to 1."));
        assert_eq!(transcript.matches("Number of letters?").count(), 4);
    }
}
