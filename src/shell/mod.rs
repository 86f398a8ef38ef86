use std::io;

use rustyline::{config::Configurer, history::DefaultHistory, Editor};

mod executor;
mod repl;

pub use executor::{tokenize, MAX_TOKENS};
pub use repl::{Repl, BANNER, FAREWELL};

use crate::{
    core::session::Session, error::ShellError, flags::ShellConfig, highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

/// Interactive front end: a line editor feeding the [`Repl`].
pub struct Shell {
    editor: Editor<ShellCompleter, DefaultHistory>,
    repl: Repl,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let session = Session::new()?;
        let highlighter = SyntaxHighlighter::new(config.color);
        let repl = Repl::new(session, highlighter, config.quiet);

        let completer = ShellCompleter::new(
            repl.executor().names(),
            repl.session().current_dir(),
            highlighter,
        );
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;
        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);

        // Outside the prompt (e.g. during a long search) Ctrl-C must not
        // take the session down.
        let quiet = config.quiet;
        ctrlc::set_handler(move || {
            if !quiet {
                println!("\nUse 'exit' to exit the shell");
            }
        })?;

        Ok(Shell { editor, repl })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut stdout = io::stdout();
        let mut stderr = io::stderr();
        self.repl.print_banner(&mut stdout)?;
        self.repl.run(&mut self.editor, &mut stdout, &mut stderr)
    }
}
