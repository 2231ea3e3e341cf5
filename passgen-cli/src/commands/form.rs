//! A line-driven rendition of the password window.
//!
//! Each input line is one action on the window. Errors are reported through
//! the error dialog and never end the session.

use crate::desktop::{NativeSaveDialog, PromptSaveDialog, SaveDialog};
use crate::{App, Config, Desktop};
use anyhow::{Context, Result};
use atty::Stream;
use std::io::{self, Write};

const HELP: &str = "\
l <n>  set the length field
g      generate
c      copy to the clipboard
s      save to a file
a      about
h      help
q      quit";

#[derive(Debug, PartialEq)]
pub enum Action<'a> {
    Length(&'a str),
    Generate,
    Copy,
    Save,
    About,
    Help,
    Quit,
}

pub fn parse_action(line: &str) -> Option<Action<'_>> {
    let line = line.trim();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "l" | "length" => Some(Action::Length(rest)),
        "g" | "generate" if rest.is_empty() => Some(Action::Generate),
        "c" | "copy" if rest.is_empty() => Some(Action::Copy),
        "s" | "save" if rest.is_empty() => Some(Action::Save),
        "a" | "about" if rest.is_empty() => Some(Action::About),
        "h" | "help" if rest.is_empty() => Some(Action::Help),
        "q" | "quit" if rest.is_empty() => Some(Action::Quit),
        _ => None,
    }
}

fn show_fields(app: &App) {
    println!("Length: {}", app.length_field());
    println!("Password: {}", app.password());
}

pub fn run(conf: Config, native_dialog: bool) -> Result<()> {
    let save_dialog: Box<dyn SaveDialog> = if native_dialog {
        Box::new(NativeSaveDialog)
    } else {
        Box::new(PromptSaveDialog)
    };
    let mut app = App::new(conf, Desktop::system(save_dialog));

    let interactive = atty::is(Stream::Stdin);
    if interactive {
        println!("{}", HELP);
        show_fields(&app);
    }

    let mut line = String::new();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        line.clear();
        let read = io::stdin()
            .read_line(&mut line)
            .with_context(|| "Couldn't read from STDIN")?;
        if read == 0 {
            break;
        }

        match parse_action(&line) {
            Some(Action::Length(text)) => {
                app.set_length_field(text);
                show_fields(&app);
            }
            Some(Action::Generate) => {
                app.on_generate();
                show_fields(&app);
            }
            Some(Action::Copy) => app.on_copy(),
            Some(Action::Save) => app.on_save(),
            Some(Action::About) => app.about(),
            Some(Action::Help) => println!("{}", HELP),
            Some(Action::Quit) => break,
            None if line.trim().is_empty() => (),
            None => eprintln!("unknown action {:?}, type h for help", line.trim()),
        }
    }

    Ok(())
}
